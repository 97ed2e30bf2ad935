/// Body content of an entry, kept in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBlock {
    Text(String),
    Bullet(String),
}

/// A titled entry in a main-column section, e.g. a job or a degree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    /// Right-hand text on the title row (dates, location)
    pub meta: Option<String>,
    pub blocks: Vec<EntryBlock>,
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.blocks.push(EntryBlock::Text(text.into()));
    }

    pub fn push_bullet(&mut self, bullet: impl Into<String>) {
        self.blocks.push(EntryBlock::Bullet(bullet.into()));
    }
}

/// A main-column section such as "Experience"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    /// Paragraphs appearing before the first entry
    pub paragraphs: Vec<String>,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Default::default()
        }
    }
}

/// A block in the narrow sidebar column, e.g. "Skills"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarBlock {
    pub heading: String,
    pub items: Vec<String>,
}

/// Everything printed on the résumé
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeContent {
    pub name: String,
    pub designation: Option<String>,
    pub sections: Vec<Section>,
    pub sidebar: Vec<SidebarBlock>,
}

impl ResumeContent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            designation: None,
            sections: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}

impl Default for ResumeContent {
    fn default() -> Self {
        Self {
            name: "Pranjal Upadhyaya".to_string(),
            designation: Some("Data Engineer".to_string()),
            sections: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}
