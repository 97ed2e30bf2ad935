//! Résumé content file parser
//!
//! The format is line oriented:
//!
//! ```text
//! = Pranjal Upadhyaya
//! == Data Engineer
//! % comments are ignored
//! # Experience
//! Free text under a section or entry becomes paragraphs.
//! ## Senior Data Engineer, Acme | 2021 - present
//! - A bullet under the entry
//! @ Skills
//! - Rust
//! ```
//!
//! Consecutive text lines join into one paragraph; a blank line ends it.

use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{char, space1},
    IResult,
};

use crate::error::ContentError;
use crate::model::{Entry, ResumeContent, Section, SidebarBlock};

/// One classified line of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Name(&'a str),
    Designation(&'a str),
    Section(&'a str),
    Entry(&'a str),
    Sidebar(&'a str),
    Item(&'a str),
    Text(&'a str),
}

/// Parse `marker`, at least one space, then the rest of the line
fn marked<'a>(marker: &'static str, input: &'a str) -> IResult<&'a str, &'a str> {
    let (input, _) = tag(marker)(input)?;
    let (input, _) = space1(input)?;
    Ok(("", input.trim_end()))
}

/// Parse an entry heading: `title | meta`, where the meta part is optional
fn entry_heading(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, title) = take_till(|c: char| c == '|')(input)?;
    if input.is_empty() {
        return Ok((input, (title.trim(), None)));
    }
    let (meta, _) = char('|')(input)?;
    let meta = meta.trim();
    Ok(("", (title.trim(), (!meta.is_empty()).then_some(meta))))
}

fn classify<'a>(line: &'a str) -> Result<Line<'a>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if trimmed.starts_with('%') {
        return Ok(Line::Comment);
    }

    // Longer markers first so "==" is not read as "="
    let markers: [(&'static str, fn(&'a str) -> Line<'a>); 6] = [
        ("==", Line::Designation),
        ("=", Line::Name),
        ("##", Line::Entry),
        ("#", Line::Section),
        ("@", Line::Sidebar),
        ("-", Line::Item),
    ];

    for (marker, make) in markers {
        if trimmed == marker {
            return Err(format!("missing text after '{}'", marker));
        }
        if let Ok((_, text)) = marked(marker, trimmed) {
            return Ok(make(text));
        }
    }

    Ok(Line::Text(trimmed))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Start,
    Section,
    Sidebar,
}

struct ContentBuilder {
    name: Option<String>,
    designation: Option<String>,
    sections: Vec<Section>,
    sidebar: Vec<SidebarBlock>,
    context: Context,
    paragraph: Vec<String>,
    /// Line where the pending paragraph started
    paragraph_line: usize,
}

impl ContentBuilder {
    fn new() -> Self {
        Self {
            name: None,
            designation: None,
            sections: Vec::new(),
            sidebar: Vec::new(),
            context: Context::Start,
            paragraph: Vec::new(),
            paragraph_line: 0,
        }
    }

    fn apply(&mut self, number: usize, line: Line<'_>) -> Result<(), ContentError> {
        let invalid = |message: &str| ContentError::InvalidLine {
            line: number,
            message: message.to_string(),
        };

        if let Line::Text(text) = line {
            if self.paragraph.is_empty() {
                self.paragraph_line = number;
            }
            self.paragraph.push(text.to_string());
            return Ok(());
        }

        if line != Line::Comment {
            self.flush_paragraph()?;
        }

        match line {
            Line::Blank | Line::Comment | Line::Text(_) => {}
            Line::Name(name) => {
                if self.name.is_some() {
                    return Err(invalid("name is already set"));
                }
                self.name = Some(name.to_string());
            }
            Line::Designation(designation) => {
                if self.designation.is_some() {
                    return Err(invalid("designation is already set"));
                }
                self.designation = Some(designation.to_string());
            }
            Line::Section(heading) => {
                self.sections.push(Section::new(heading));
                self.context = Context::Section;
            }
            Line::Entry(heading) => {
                let section = match self.context {
                    Context::Section => self.sections.last_mut(),
                    _ => None,
                };
                let section = section.ok_or(ContentError::OrphanEntry { line: number })?;
                let (_, (title, meta)) =
                    entry_heading(heading).map_err(|_| invalid("malformed entry heading"))?;
                if title.is_empty() {
                    return Err(invalid("entry title is empty"));
                }
                let entry = Entry::new(title);
                section.entries.push(match meta {
                    Some(meta) => entry.with_meta(meta),
                    None => entry,
                });
            }
            Line::Sidebar(heading) => {
                self.sidebar.push(SidebarBlock {
                    heading: heading.to_string(),
                    items: Vec::new(),
                });
                self.context = Context::Sidebar;
            }
            Line::Item(item) => match self.context {
                Context::Sidebar => {
                    if let Some(block) = self.sidebar.last_mut() {
                        block.items.push(item.to_string());
                    }
                }
                Context::Section => {
                    let entry = self
                        .sections
                        .last_mut()
                        .and_then(|section| section.entries.last_mut())
                        .ok_or_else(|| invalid("bullet outside an entry"))?;
                    entry.push_bullet(item);
                }
                Context::Start => return Err(invalid("bullet before any section")),
            },
        }
        Ok(())
    }

    fn flush_paragraph(&mut self) -> Result<(), ContentError> {
        if self.paragraph.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        let invalid = |message: &str| ContentError::InvalidLine {
            line: self.paragraph_line,
            message: message.to_string(),
        };

        match self.context {
            Context::Start => Err(invalid("text before the first section")),
            Context::Sidebar => Err(invalid("sidebar blocks only hold '-' items")),
            Context::Section => {
                if let Some(section) = self.sections.last_mut() {
                    match section.entries.last_mut() {
                        Some(entry) => entry.push_text(text),
                        None => section.paragraphs.push(text),
                    }
                }
                Ok(())
            }
        }
    }

    fn finish(mut self) -> Result<ResumeContent, ContentError> {
        self.flush_paragraph()?;
        let name = self.name.ok_or(ContentError::MissingName)?;
        let mut content = ResumeContent::new(name);
        content.designation = self.designation;
        content.sections = self.sections;
        content.sidebar = self.sidebar;
        Ok(content)
    }
}

/// Parse a résumé content file
pub fn parse_content(input: &str) -> Result<ResumeContent, ContentError> {
    let mut builder = ContentBuilder::new();

    for (index, raw) in input.lines().enumerate() {
        let number = index + 1;
        let line = classify(raw).map_err(|message| ContentError::InvalidLine {
            line: number,
            message,
        })?;
        builder.apply(number, line)?;
    }

    let content = builder.finish()?;
    log::debug!(
        "Parsed content for '{}': {} section(s), {} sidebar block(s)",
        content.name,
        content.sections.len(),
        content.sidebar.len()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryBlock;

    const SAMPLE: &str = "\
= Pranjal Upadhyaya
== Data Engineer
% not printed

# Summary
Builds data platforms
that people trust.

Second paragraph.

# Experience
## Senior Data Engineer, Acme | 2021 - present
Owned the ingestion layer.
- Cut warehouse cost by a third
- Mentored four engineers
## Intern, Initech

@ Skills
- Rust
- SQL
";

    #[test]
    fn test_classify_markers() {
        assert_eq!(classify("= Jane").unwrap(), Line::Name("Jane"));
        assert_eq!(classify("== Engineer  ").unwrap(), Line::Designation("Engineer"));
        assert_eq!(classify("## Role | 2020").unwrap(), Line::Entry("Role | 2020"));
        assert_eq!(classify("  # Education").unwrap(), Line::Section("Education"));
        assert_eq!(classify("@ Languages").unwrap(), Line::Sidebar("Languages"));
        assert_eq!(classify("- item").unwrap(), Line::Item("item"));
        assert_eq!(classify("% note").unwrap(), Line::Comment);
        assert_eq!(classify("   ").unwrap(), Line::Blank);
    }

    #[test]
    fn test_marker_needs_a_space() {
        assert_eq!(classify("#hashtag").unwrap(), Line::Text("#hashtag"));
        assert_eq!(classify("-5% churn").unwrap(), Line::Text("-5% churn"));
    }

    #[test]
    fn test_bare_marker_is_an_error() {
        assert!(classify("#").is_err());
        assert!(classify("== ").is_err());
    }

    #[test]
    fn test_entry_heading() {
        assert_eq!(entry_heading("Role | 2020").unwrap().1, ("Role", Some("2020")));
        assert_eq!(entry_heading("Role").unwrap().1, ("Role", None));
        assert_eq!(entry_heading("Role |  ").unwrap().1, ("Role", None));
        assert_eq!(entry_heading("A | B | C").unwrap().1, ("A", Some("B | C")));
    }

    #[test]
    fn test_parse_sample() {
        let content = parse_content(SAMPLE).unwrap();
        assert_eq!(content.name, "Pranjal Upadhyaya");
        assert_eq!(content.designation.as_deref(), Some("Data Engineer"));
        assert_eq!(content.sections.len(), 2);

        let summary = &content.sections[0];
        assert_eq!(summary.heading, "Summary");
        assert_eq!(
            summary.paragraphs,
            vec!["Builds data platforms that people trust.", "Second paragraph."]
        );

        let experience = &content.sections[1];
        assert_eq!(experience.entries.len(), 2);
        let acme = &experience.entries[0];
        assert_eq!(acme.meta.as_deref(), Some("2021 - present"));
        assert_eq!(
            acme.blocks,
            vec![
                EntryBlock::Text("Owned the ingestion layer.".to_string()),
                EntryBlock::Bullet("Cut warehouse cost by a third".to_string()),
                EntryBlock::Bullet("Mentored four engineers".to_string()),
            ]
        );
        assert_eq!(experience.entries[1].meta, None);

        assert_eq!(content.sidebar.len(), 1);
        assert_eq!(content.sidebar[0].items, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_missing_name() {
        let err = parse_content("# Experience\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingName));
    }

    #[test]
    fn test_orphan_entry_reports_line() {
        let err = parse_content("= Jane\n## Role | 2020\n").unwrap_err();
        assert!(matches!(err, ContentError::OrphanEntry { line: 2 }));
    }

    #[test]
    fn test_text_before_section_reports_first_line() {
        let err = parse_content("= Jane\n\nHello\nworld\n# Experience\n").unwrap_err();
        assert!(matches!(err, ContentError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_bullet_outside_entry() {
        let err = parse_content("= Jane\n# Skills\n- Rust\n").unwrap_err();
        assert!(matches!(err, ContentError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_duplicate_name() {
        let err = parse_content("= Jane\n= John\n").unwrap_err();
        assert!(matches!(err, ContentError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn test_entry_keeps_text_and_bullets_in_order() {
        let content =
            parse_content("= Jane\n# Experience\n## Role\n- first bullet\nLater prose.\n- last\n")
                .unwrap();
        assert_eq!(
            content.sections[0].entries[0].blocks,
            vec![
                EntryBlock::Bullet("first bullet".to_string()),
                EntryBlock::Text("Later prose.".to_string()),
                EntryBlock::Bullet("last".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_does_not_break_paragraph() {
        let content = parse_content("= Jane\n# About\none\n% aside\ntwo\n").unwrap();
        assert_eq!(content.sections[0].paragraphs, vec!["one two"]);
    }
}
