use super::flowables::Flowable;

/// Layout instructions interleaved with content in a story
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Move to the next frame, or a new page after the last frame
    FrameBreak,
    /// Move to frame N of the current page's template
    AdvanceToFrame(usize),
    /// Start a new page, optionally using another template for that page only
    PageBreak { template: Option<String> },
    /// Use this template for the next page that gets started
    NextTemplate(String),
}

#[derive(Debug, Clone)]
pub enum StoryItem {
    Flowable(Flowable),
    Directive(Directive),
}

/// Ordered content for one document
#[derive(Debug, Clone, Default)]
pub struct Story {
    items: Vec<StoryItem>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flowable: impl Into<Flowable>) -> &mut Self {
        self.items.push(StoryItem::Flowable(flowable.into()));
        self
    }

    pub fn directive(&mut self, directive: Directive) -> &mut Self {
        self.items.push(StoryItem::Directive(directive));
        self
    }

    pub fn frame_break(&mut self) -> &mut Self {
        self.directive(Directive::FrameBreak)
    }

    pub fn advance_to_frame(&mut self, index: usize) -> &mut Self {
        self.directive(Directive::AdvanceToFrame(index))
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.directive(Directive::PageBreak { template: None })
    }

    pub fn page_break_with(&mut self, template: impl Into<String>) -> &mut Self {
        self.directive(Directive::PageBreak {
            template: Some(template.into()),
        })
    }

    pub fn next_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.directive(Directive::NextTemplate(template.into()))
    }

    pub fn items(&self) -> &[StoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<StoryItem> {
        self.items
    }
}
