//! Résumé layout
//!
//! Builds the story for a résumé: name and designation in the header
//! frame, sections in the main column and sidebar blocks in the narrow
//! column.

use std::path::Path;

use crate::config::Settings;
use crate::error::RenderError;
use crate::model::{pt, Alignment, Entry, EntryBlock, ResumeContent, Section, StyleId, StyleSheet};
use crate::render::document::DocumentRenderer;
use crate::render::engine::LayoutEngine;
use crate::render::flowables::{HorizontalRule, Paragraph, RuleWidth, SideBySide, Spacer};
use crate::render::helpers::colors::RULE_GRAY;
use crate::render::story::Story;

use super::templates::resume_templates;

/// Frame indices shared by the built-in templates
const HEADER_FRAME: usize = 0;
const MAIN_FRAME: usize = 1;
const SIDEBAR_FRAME: usize = 2;

/// Height of the box a section rule sits in, in points
const RULE_BOX_HEIGHT: f32 = 6.0;

pub struct ResumeRenderer {
    settings: Settings,
    styles: StyleSheet,
}

impl ResumeRenderer {
    pub fn new(settings: Settings) -> Self {
        let styles = settings.style_sheet();
        Self { settings, styles }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the story for `content`
    pub fn story(&self, content: &ResumeContent) -> Story {
        let mut story = Story::new();

        story.advance_to_frame(HEADER_FRAME);
        story.push(self.paragraph(&content.name, StyleId::Title));
        if let Some(designation) = &content.designation {
            story.push(Spacer::vertical_pt(self.settings.title_gap));
            story.push(self.paragraph(designation, StyleId::Header2));
        }

        story.advance_to_frame(MAIN_FRAME);
        for section in &content.sections {
            self.push_section(&mut story, section);
        }

        if !content.sidebar.is_empty() {
            story.advance_to_frame(SIDEBAR_FRAME);
            for block in &content.sidebar {
                story.push(self.paragraph(&block.heading, StyleId::Strong));
                for item in &block.items {
                    story.push(self.paragraph(item, StyleId::Normal));
                }
            }
        }

        log::debug!(
            "Built story of {} items for {} section(s)",
            story.len(),
            content.sections.len()
        );
        story
    }

    /// Lay out and render `content` to PDF bytes
    pub fn render(&self, content: &ResumeContent) -> Result<Vec<u8>, RenderError> {
        let templates = resume_templates(&self.settings)?;
        DocumentRenderer::new(&templates, &self.settings).compose(self.story(content))
    }

    /// Render `content` and write the PDF to `path`
    pub fn write(&self, content: &ResumeContent, path: &Path) -> Result<(), RenderError> {
        let templates = resume_templates(&self.settings)?;
        let laid_out = LayoutEngine::new(&templates).build(self.story(content))?;
        DocumentRenderer::new(&templates, &self.settings).write(&laid_out, path)
    }

    fn paragraph(&self, text: &str, style: StyleId) -> Paragraph {
        Paragraph::new(text, self.styles.get(style))
    }

    fn push_section(&self, story: &mut Story, section: &Section) {
        story.push(self.paragraph(&section.heading, StyleId::Header3));
        story.push(
            HorizontalRule::new(RuleWidth::Full, pt(RULE_BOX_HEIGHT))
                .with_thickness(self.settings.rule_thickness)
                .with_color(RULE_GRAY)
                .with_offset(pt(RULE_BOX_HEIGHT - 2.0)),
        );
        for text in &section.paragraphs {
            story.push(self.paragraph(text, StyleId::Body));
        }
        for entry in &section.entries {
            self.push_entry(story, entry);
        }
    }

    fn push_entry(&self, story: &mut Story, entry: &Entry) {
        let title = self.paragraph(&entry.title, StyleId::Strong);
        match &entry.meta {
            Some(meta) => {
                let style = self
                    .styles
                    .get(StyleId::Normal)
                    .clone()
                    .with_alignment(Alignment::Right);
                story.push(SideBySide::new(
                    title,
                    Paragraph::new(meta, &style),
                    self.settings.entry_title_fraction,
                ));
            }
            None => {
                story.push(title);
            }
        }
        for block in &entry.blocks {
            match block {
                EntryBlock::Text(text) => story.push(self.paragraph(text, StyleId::Body)),
                EntryBlock::Bullet(bullet) => {
                    story.push(self.paragraph(&format!("- {}", bullet), StyleId::Body))
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SidebarBlock;
    use crate::render::story::{Directive, StoryItem};
    use crate::render::flowables::Flowable;

    fn content() -> ResumeContent {
        let mut entry = Entry::new("Senior Data Engineer, Acme").with_meta("2021 - present");
        entry.push_bullet("Moved the warehouse to columnar storage");

        let mut section = Section::new("Experience");
        section.paragraphs.push("Eight years of pipelines.".to_string());
        section.entries.push(entry);
        section.entries.push(Entry::new("Data Engineer, Initech"));

        let mut content = ResumeContent::default();
        content.sections.push(section);
        content.sidebar.push(SidebarBlock {
            heading: "Skills".to_string(),
            items: vec!["Rust".to_string(), "SQL".to_string()],
        });
        content
    }

    fn kinds(story: &Story) -> Vec<String> {
        story
            .items()
            .iter()
            .map(|item| match item {
                StoryItem::Flowable(f) => f.kind().to_string(),
                StoryItem::Directive(Directive::AdvanceToFrame(i)) => format!("frame{}", i),
                StoryItem::Directive(d) => format!("{:?}", d),
            })
            .collect()
    }

    #[test]
    fn test_story_order() {
        let renderer = ResumeRenderer::new(Settings::default());
        let story = renderer.story(&content());
        assert_eq!(
            kinds(&story),
            vec![
                "frame0",
                "paragraph",
                "spacer",
                "paragraph",
                "frame1",
                "paragraph",
                "rule",
                "paragraph",
                "side-by-side row",
                "paragraph",
                "paragraph",
                "frame2",
                "paragraph",
                "paragraph",
                "paragraph",
            ]
        );
    }

    #[test]
    fn test_name_uses_title_style() {
        let renderer = ResumeRenderer::new(Settings::default());
        let story = renderer.story(&ResumeContent::default());
        match &story.items()[1] {
            StoryItem::Flowable(Flowable::Paragraph(p)) => {
                assert_eq!(p.text(), "Pranjal Upadhyaya");
                assert_eq!(p.style().font_size, 36.0);
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_bullets_are_prefixed() {
        let renderer = ResumeRenderer::new(Settings::default());
        let story = renderer.story(&content());
        let bullet = story.items().iter().find_map(|item| match item {
            StoryItem::Flowable(Flowable::Paragraph(p)) if p.text().starts_with("- ") => {
                Some(p.text().to_string())
            }
            _ => None,
        });
        assert_eq!(bullet.as_deref(), Some("- Moved the warehouse to columnar storage"));
    }

    #[test]
    fn test_header_lands_in_header_frame() {
        let settings = Settings::default();
        let renderer = ResumeRenderer::new(settings.clone());
        let templates = resume_templates(&settings).unwrap();
        let doc = LayoutEngine::new(&templates)
            .build(renderer.story(&content()))
            .unwrap();

        assert_eq!(doc.page_count(), 1);
        let frames: Vec<usize> = doc.pages[0].placements.iter().map(|p| p.frame).collect();
        assert_eq!(&frames[..3], &[0, 0, 0]);
        assert_eq!(*frames.last().unwrap(), 2);
        assert!(frames.contains(&1));
    }

    #[test]
    fn test_banded_layout_uses_one_page() {
        let settings = Settings::default().with_template(crate::cli::TemplateKind::Banded);
        let renderer = ResumeRenderer::new(settings.clone());
        let templates = resume_templates(&settings).unwrap();
        let doc = LayoutEngine::new(&templates)
            .build(renderer.story(&content()))
            .unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    fn paragraph_texts(story: &Story) -> Vec<String> {
        story
            .items()
            .iter()
            .filter_map(|item| match item {
                StoryItem::Flowable(Flowable::Paragraph(p)) => Some(p.text().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_entry_blocks_keep_source_order() {
        let mut entry = Entry::new("Analyst");
        entry.push_bullet("first bullet");
        entry.push_text("Later prose.");
        entry.push_bullet("closing bullet");

        let mut section = Section::new("Experience");
        section.entries.push(entry);
        let mut content = ResumeContent::new("Jane Doe");
        content.sections.push(section);

        let renderer = ResumeRenderer::new(Settings::default());
        let texts = paragraph_texts(&renderer.story(&content));
        assert_eq!(
            texts,
            vec![
                "Jane Doe",
                "Experience",
                "Analyst",
                "- first bullet",
                "Later prose.",
                "- closing bullet",
            ]
        );
    }
}
