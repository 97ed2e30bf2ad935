//! Layout engine
//!
//! Pours a story into the frames of a template set. Frames fill top to
//! bottom; directives or overflow move on to the next frame, and past the
//! last frame to a new page. The result is pure geometry, which
//! `DocumentRenderer` turns into PDF pages.

use crate::error::RenderError;
use crate::model::geometry::EPSILON;
use crate::model::{PageTemplate, Rect, Size, TemplateSet};
use crate::render::flowables::Flowable;
use crate::render::story::{Directive, Story, StoryItem};

/// A flowable positioned on a page
#[derive(Debug, Clone)]
pub struct Placement {
    /// Index of the story item this came from; split pieces share it
    pub source: usize,
    /// Frame index within the page's template
    pub frame: usize,
    pub rect: Rect,
    pub flowable: Flowable,
}

#[derive(Debug, Clone)]
pub struct LaidOutPage {
    /// Index into the template set
    pub template: usize,
    pub placements: Vec<Placement>,
}

impl LaidOutPage {
    fn new(template: usize) -> Self {
        Self {
            template,
            placements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.pages.iter().flat_map(|p| p.placements.iter())
    }
}

/// Lays out stories against a fixed template set
pub struct LayoutEngine<'a> {
    templates: &'a TemplateSet,
    main: usize,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(templates: &'a TemplateSet) -> Self {
        Self { templates, main: 0 }
    }

    /// Use another template for pages that are not overridden by a directive
    pub fn with_main_template(mut self, id: &str) -> Result<Self, RenderError> {
        self.main = self.templates.index_of(id)?;
        Ok(self)
    }

    pub fn build(&self, story: Story) -> Result<LaidOutDocument, RenderError> {
        self.check_references(&story)?;

        let mut state = FlowState::new(self.templates, self.main);

        for (source, item) in story.into_items().into_iter().enumerate() {
            match item {
                StoryItem::Flowable(flowable) => state.place(source, flowable)?,
                StoryItem::Directive(directive) => state.apply(&directive)?,
            }
        }

        let document = state.finish();
        log::info!(
            "Laid out {} placements on {} page(s)",
            document.placements().count(),
            document.page_count()
        );
        Ok(document)
    }

    /// Fail on unknown template ids before any layout happens
    fn check_references(&self, story: &Story) -> Result<(), RenderError> {
        for item in story.items() {
            match item {
                StoryItem::Directive(Directive::PageBreak { template: Some(id) })
                | StoryItem::Directive(Directive::NextTemplate(id)) => {
                    self.templates.index_of(id)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Lay out `story` using the first template as the main one
pub fn build(templates: &TemplateSet, story: Story) -> Result<LaidOutDocument, RenderError> {
    LayoutEngine::new(templates).build(story)
}

struct FlowState<'a> {
    templates: &'a TemplateSet,
    main: usize,
    /// Template for the next page only
    pending: Option<usize>,
    pages: Vec<LaidOutPage>,
    page: LaidOutPage,
    frame: usize,
    /// Height consumed in the current frame
    used: f32,
    frame_has_content: bool,
}

impl<'a> FlowState<'a> {
    fn new(templates: &'a TemplateSet, main: usize) -> Self {
        Self {
            templates,
            main,
            pending: None,
            pages: Vec::new(),
            page: LaidOutPage::new(main),
            frame: 0,
            used: 0.0,
            frame_has_content: false,
        }
    }

    fn template(&self) -> &'a PageTemplate {
        self.templates.get(self.page.template)
    }

    fn content_rect(&self) -> Rect {
        self.template().frames[self.frame].content_rect()
    }

    fn reset_frame(&mut self, frame: usize) {
        self.frame = frame;
        self.used = 0.0;
        self.frame_has_content = false;
    }

    fn new_page(&mut self) {
        let template = self.pending.take().unwrap_or(self.main);
        let finished = std::mem::replace(&mut self.page, LaidOutPage::new(template));
        self.pages.push(finished);
        self.reset_frame(0);
        log::debug!(
            "Page {} uses template '{}'",
            self.pages.len() + 1,
            self.template().id
        );
    }

    fn next_frame(&mut self) {
        if self.frame + 1 < self.template().frames.len() {
            self.reset_frame(self.frame + 1);
            log::debug!(
                "Advanced to frame {}",
                self.template().frames[self.frame].label(self.frame)
            );
        } else {
            self.new_page();
        }
    }

    fn advance_to(&mut self, index: usize) -> Result<(), RenderError> {
        if index == self.frame && !self.frame_has_content {
            return Ok(());
        }
        if index <= self.frame {
            // Frame already filled or passed on this page
            self.new_page();
        }

        let template = self.template();
        if template.frame(index).is_none() {
            return Err(RenderError::UndefinedFrame {
                template: template.id.clone(),
                index,
                count: template.frames.len(),
            });
        }

        self.reset_frame(index);
        Ok(())
    }

    fn apply(&mut self, directive: &Directive) -> Result<(), RenderError> {
        match directive {
            Directive::FrameBreak => self.next_frame(),
            Directive::AdvanceToFrame(index) => self.advance_to(*index)?,
            Directive::PageBreak { template } => {
                if let Some(id) = template {
                    self.pending = Some(self.templates.index_of(id)?);
                }
                self.new_page();
            }
            Directive::NextTemplate(id) => {
                self.pending = Some(self.templates.index_of(id)?);
            }
        }
        Ok(())
    }

    fn place(&mut self, source: usize, mut flowable: Flowable) -> Result<(), RenderError> {
        loop {
            let content = self.content_rect();
            let space_before = if self.frame_has_content {
                flowable.space_before()
            } else {
                0.0
            };
            let available = content.height - self.used - space_before;
            let size = flowable.measure(content.width, available.max(0.0));

            if size.width > content.width + EPSILON {
                // No later frame is guaranteed to be wider
                return Err(self.overflow(&flowable, size, &content));
            }

            if size.height <= available + EPSILON {
                self.commit(source, flowable, size, space_before);
                return Ok(());
            }

            if matches!(flowable, Flowable::Spacer(_)) && self.frame_has_content {
                // A spacer that does not fit just ends the frame
                self.next_frame();
                return Ok(());
            }

            if available > 0.0 {
                if let Some((head, tail)) = flowable.split(content.width, available) {
                    let head_size = head.measure(content.width, available);
                    self.commit(source, head, head_size, space_before);
                    self.next_frame();
                    flowable = tail;
                    continue;
                }
            }

            if !self.frame_has_content {
                return Err(self.overflow(&flowable, size, &content));
            }

            self.next_frame();
        }
    }

    fn overflow(&self, flowable: &Flowable, size: Size, content: &Rect) -> RenderError {
        RenderError::LayoutOverflow {
            kind: flowable.kind(),
            template: self.template().id.clone(),
            frame: self.frame,
            needed_width: size.width,
            needed_height: size.height,
            available_width: content.width,
            available_height: content.height,
        }
    }

    fn commit(&mut self, source: usize, flowable: Flowable, size: Size, space_before: f32) {
        let content = self.content_rect();
        let top = content.top() - self.used - space_before;
        let rect = Rect::new(content.x, top - size.height, size.width, size.height);

        self.used = (self.used + space_before + size.height + flowable.space_after())
            .min(content.height);
        self.frame_has_content = true;

        log::debug!(
            "Placed {} #{} in frame {} at y={:.1}mm (h={:.1}mm)",
            flowable.kind(),
            source,
            self.frame,
            rect.y,
            rect.height
        );

        self.page.placements.push(Placement {
            source,
            frame: self.frame,
            rect,
            flowable,
        });
    }

    fn finish(mut self) -> LaidOutDocument {
        self.pages.push(self.page);
        LaidOutDocument { pages: self.pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, Padding, Style};
    use crate::render::flowables::{HorizontalRule, Paragraph, RuleWidth, SideBySide, Spacer};
    use printpdf::BuiltinFont;

    /// 100x100 page: a top frame (y 50..100) and two bottom columns
    fn templates() -> TemplateSet {
        let main = PageTemplate::new("main")
            .with_frame(Frame::new(Rect::new(0.0, 50.0, 100.0, 50.0), Padding::default()))
            .with_frame(Frame::new(Rect::new(0.0, 0.0, 50.0, 50.0), Padding::default()))
            .with_frame(Frame::new(Rect::new(50.0, 0.0, 50.0, 50.0), Padding::default()));
        let cover = PageTemplate::new("cover")
            .with_frame(Frame::new(Rect::new(0.0, 0.0, 100.0, 100.0), Padding::uniform(10.0)));
        TemplateSet::new(100.0, 100.0, vec![main, cover]).unwrap()
    }

    /// Fixed-size flowable that never splits
    fn block(height: f32) -> HorizontalRule {
        HorizontalRule::new(RuleWidth::Fixed(10.0), height)
    }

    #[test]
    fn test_empty_story_gives_one_blank_page() {
        let templates = templates();
        let doc = build(&templates, Story::new()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].template, 0);
        assert!(doc.pages[0].placements.is_empty());
    }

    #[test]
    fn test_fills_top_to_bottom() {
        let templates = templates();
        let mut story = Story::new();
        story.push(block(10.0)).push(block(15.0)).push(block(5.0));
        let doc = build(&templates, story).unwrap();

        let rects: Vec<Rect> = doc.placements().map(|p| p.rect).collect();
        assert_eq!(rects[0], Rect::new(0.0, 90.0, 10.0, 10.0));
        assert_eq!(rects[1], Rect::new(0.0, 75.0, 10.0, 15.0));
        assert_eq!(rects[2], Rect::new(0.0, 70.0, 10.0, 5.0));
        for pair in rects.windows(2) {
            assert!(pair[1].top() <= pair[0].y + EPSILON);
        }
    }

    #[test]
    fn test_overflow_moves_to_next_frame() {
        let templates = templates();
        let mut story = Story::new();
        story.push(block(30.0)).push(block(30.0));
        let doc = build(&templates, story).unwrap();

        let frames: Vec<usize> = doc.placements().map(|p| p.frame).collect();
        assert_eq!(frames, vec![0, 1]);
        assert_eq!(doc.pages[0].placements[1].rect.top(), 50.0);
    }

    #[test]
    fn test_overflow_past_last_frame_starts_new_page() {
        let templates = templates();
        let mut story = Story::new();
        story.frame_break().frame_break().push(block(10.0)).frame_break().push(block(10.0));
        let doc = build(&templates, story).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].placements[0].frame, 2);
        assert_eq!(doc.pages[1].placements[0].frame, 0);
    }

    #[test]
    fn test_advance_to_frame_is_absolute() {
        let templates = templates();
        let mut story = Story::new();
        story.push(block(5.0)).advance_to_frame(2).push(block(5.0));
        let doc = build(&templates, story).unwrap();

        assert_eq!(doc.page_count(), 1);
        let placed = &doc.pages[0].placements[1];
        assert_eq!(placed.frame, 2);
        assert_eq!(placed.rect, Rect::new(50.0, 45.0, 10.0, 5.0));
    }

    #[test]
    fn test_repeated_advance_is_idempotent() {
        let templates = templates();
        let mut story = Story::new();
        story
            .advance_to_frame(1)
            .advance_to_frame(1)
            .push(block(5.0));
        let doc = build(&templates, story).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].placements[0].frame, 1);
    }

    #[test]
    fn test_advance_to_passed_frame_starts_new_page() {
        let templates = templates();
        let mut story = Story::new();
        story
            .advance_to_frame(2)
            .push(block(5.0))
            .advance_to_frame(1)
            .push(block(5.0));
        let doc = build(&templates, story).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[1].placements[0].frame, 1);
        assert_eq!(doc.pages[1].placements[0].rect.top(), 50.0);
    }

    #[test]
    fn test_advance_to_missing_frame_fails() {
        let templates = templates();
        let mut story = Story::new();
        story.advance_to_frame(7);
        let err = build(&templates, story).unwrap_err();
        assert!(matches!(err, RenderError::UndefinedFrame { index: 7, count: 3, .. }));
    }

    #[test]
    fn test_page_break_template_applies_to_one_page() {
        let templates = templates();
        let mut story = Story::new();
        story
            .push(block(5.0))
            .page_break_with("cover")
            .push(block(5.0))
            .page_break()
            .push(block(5.0));
        let doc = build(&templates, story).unwrap();

        let used: Vec<usize> = doc.pages.iter().map(|p| p.template).collect();
        assert_eq!(used, vec![0, 1, 0]);
        // cover frame has 10mm padding
        assert_eq!(doc.pages[1].placements[0].rect.top(), 90.0);
    }

    #[test]
    fn test_next_template_applies_on_overflow() {
        let templates = templates();
        let mut story = Story::new();
        story
            .next_template("cover")
            .advance_to_frame(2)
            .push(block(40.0))
            .push(block(40.0))
            .push(block(45.0));
        let doc = build(&templates, story).unwrap();

        let used: Vec<usize> = doc.pages.iter().map(|p| p.template).collect();
        assert_eq!(used, vec![0, 1, 0]);
    }

    #[test]
    fn test_undefined_template_fails_before_layout() {
        let templates = templates();
        let mut story = Story::new();
        story.push(block(5.0)).page_break_with("missing");
        let err = build(&templates, story).unwrap_err();
        assert!(matches!(err, RenderError::UndefinedTemplate(ref id) if id == "missing"));
    }

    #[test]
    fn test_flowable_larger_than_empty_frame_overflows() {
        let templates = templates();
        let mut story = Story::new();
        story.push(block(60.0));
        let err = build(&templates, story).unwrap_err();
        assert!(matches!(err, RenderError::LayoutOverflow { kind: "rule", frame: 0, .. }));
    }

    #[test]
    fn test_flowable_wider_than_frame_overflows() {
        let templates = templates();
        let mut story = Story::new();
        story.push(HorizontalRule::new(RuleWidth::Fixed(200.0), 2.0));
        let err = build(&templates, story).unwrap_err();
        match err {
            RenderError::LayoutOverflow {
                needed_width,
                available_width,
                frame,
                ..
            } => {
                assert_eq!(frame, 0);
                assert_eq!(needed_width, 200.0);
                assert_eq!(available_width, 100.0);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_wide_flowable_fails_even_after_content() {
        let templates = templates();
        let mut story = Story::new();
        story.frame_break();
        story.push(block(5.0));
        story.push(HorizontalRule::new(RuleWidth::Fixed(60.0), 2.0));
        let err = build(&templates, story).unwrap_err();
        assert!(matches!(
            err,
            RenderError::LayoutOverflow { frame: 1, needed_width, .. } if needed_width == 60.0
        ));
    }

    #[test]
    fn test_spacer_that_does_not_fit_ends_frame() {
        let templates = templates();
        let mut story = Story::new();
        story
            .push(Spacer::new(10.0, 40.0))
            .push(Spacer::new(10.0, 20.0))
            .push(Spacer::new(10.0, 5.0));
        let doc = build(&templates, story).unwrap();

        let placed: Vec<(usize, usize)> = doc.placements().map(|p| (p.source, p.frame)).collect();
        assert_eq!(placed, vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_paragraph_splits_across_frames() {
        let templates = templates();
        let style = Style::new(BuiltinFont::Helvetica, 10.0).with_leading(12.0);
        let words = vec!["workload"; 120].join(" ");
        let mut story = Story::new();
        story.push(Paragraph::new(&words, &style));
        let doc = build(&templates, story).unwrap();

        let pieces: Vec<&Placement> = doc.placements().collect();
        assert!(pieces.len() >= 2);
        assert!(pieces.iter().all(|p| p.source == 0));
        assert_eq!(pieces[0].frame, 0);
        assert_eq!(pieces[1].frame, 1);
        for piece in &pieces {
            assert!(piece.rect.height <= 50.0 + EPSILON);
        }
    }

    #[test]
    fn test_space_before_dropped_at_frame_top() {
        let templates = templates();
        let style = Style::new(BuiltinFont::Helvetica, 10.0)
            .with_leading(10.0)
            .with_space_before(10.0);
        let mut story = Story::new();
        story
            .push(Paragraph::new("first", &style))
            .push(Paragraph::new("second", &style));
        let doc = build(&templates, story).unwrap();

        let rects: Vec<Rect> = doc.placements().map(|p| p.rect).collect();
        assert!((rects[0].top() - 100.0).abs() < EPSILON);
        let gap = rects[0].y - rects[1].top();
        assert!((gap - crate::model::pt(10.0)).abs() < EPSILON);
    }

    #[test]
    fn test_side_by_side_row_takes_taller_height() {
        let templates = templates();
        let mut story = Story::new();
        story.push(SideBySide::new(block(20.0), block(35.0), 0.5));
        let doc = build(&templates, story).unwrap();
        let rect = doc.pages[0].placements[0].rect;
        assert_eq!(rect.height, 35.0);
        assert_eq!(rect.width, 100.0);
    }

    #[test]
    fn test_main_template_override() {
        let templates = templates();
        let engine = LayoutEngine::new(&templates).with_main_template("cover").unwrap();
        let doc = engine.build(Story::new()).unwrap();
        assert_eq!(doc.pages[0].template, 1);
        assert!(LayoutEngine::new(&templates).with_main_template("nope").is_err());
    }
}
