//! Document builder: the parse state machine.
//!
//! Consumes the scanner's line stream, classifies each line, and builds the
//! document model incrementally. The builder never fails: every line is
//! absorbed into some classification, and lines with no home (text before
//! the first recognized section header, content with no current entry) are
//! dropped rather than rejected.

use crate::model::{
    Bullet, BulletStyle, ContentItem, Entry, Header, ResumeDocument, Section, Skill,
    StandardSection,
};

use super::classifier::{self, ContentClass};
use super::ids::{IdGenerator, UuidGenerator};
use super::scanner::LineScanner;

/// Builds a [`ResumeDocument`] from raw text.
///
/// Owns the id generator so parses can be made deterministic in tests:
///
/// ```
/// use unresume::parser::{DocumentBuilder, SequentialIdGenerator};
///
/// let doc = DocumentBuilder::with_ids(SequentialIdGenerator::new())
///     .parse("EDUCATION\nBSc | MIT\tSep 2018 – Jun 2022\n");
/// assert_eq!(doc.sections[0].id(), "id-1");
/// ```
pub struct DocumentBuilder<G = UuidGenerator> {
    ids: G,
}

impl DocumentBuilder<UuidGenerator> {
    /// Create a builder with random v4 ids.
    pub fn new() -> Self {
        Self { ids: UuidGenerator }
    }
}

impl Default for DocumentBuilder<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> DocumentBuilder<G> {
    /// Create a builder with an injected id generator.
    pub fn with_ids(ids: G) -> Self {
        Self { ids }
    }

    /// Parse raw resume text into a document model.
    ///
    /// Total over any input: empty or non-resume-shaped text yields a
    /// document with no header and no sections.
    pub fn parse(mut self, text: &str) -> ResumeDocument {
        let mut scanner = LineScanner::new(text);
        let mut doc = ResumeDocument::new();
        let mut current: Option<Section> = None;
        let mut awaiting_header = true;

        while let Some(line) = scanner.next_line() {
            if awaiting_header {
                awaiting_header = false;
                // Header parsing never blocks progress: on failure the line
                // falls through to normal classification.
                if let Some((name, contact)) = classifier::split_header(line) {
                    doc.header = Some(Header { name, contact });
                    continue;
                }
            }

            if let Some(title) = classifier::match_section_header(line) {
                if let Some(section) = current.take() {
                    doc.sections.push(section);
                }
                current = Some(Section::for_title(title, &mut self.ids));
                continue;
            }

            match current.as_mut() {
                None => {
                    // Stray text between the header and the first section.
                    log::debug!("dropping pre-section line: {:?}", line.trim());
                }
                Some(Section::Skills(section)) => {
                    let (category, details) = classifier::split_skill(line);
                    section.add_skill(Skill::new(self.ids.next_id(), category, details));
                }
                Some(Section::Standard(section)) => {
                    let class = classifier::classify_content(line, scanner.peek());
                    self.push_content(section, class);
                }
            }
        }

        if let Some(section) = current.take() {
            doc.sections.push(section);
        }
        doc
    }

    fn push_content(&mut self, section: &mut StandardSection, class: ContentClass) {
        if let ContentClass::EntryTitle {
            title,
            subtitle,
            date,
        } = class
        {
            section.add_entry(Entry::new(self.ids.next_id(), title, subtitle, date));
            return;
        }

        let Some(entry) = section.entries.last_mut() else {
            log::debug!("dropping content line with no current entry");
            return;
        };

        match class {
            ContentClass::EntryTitle { .. } => unreachable!("handled above"),
            ContentClass::Subheading { title, rest } => {
                let mut bullets = Vec::new();
                if !rest.is_empty() {
                    bullets.push(Bullet::new(self.ids.next_id(), BulletStyle::Circle, rest));
                }
                entry.content.push(ContentItem::Subheading {
                    id: self.ids.next_id(),
                    title,
                    bullets,
                });
            }
            ContentClass::Bullet { content } => {
                entry.content.push(ContentItem::Bullet(Bullet::new(
                    self.ids.next_id(),
                    BulletStyle::Disc,
                    content,
                )));
            }
            ContentClass::SubBullet { content } => {
                // An `o` bullet attaches to the subheading directly above
                // it; otherwise it stands alone.
                match entry.content.last_mut() {
                    Some(ContentItem::Subheading { bullets, .. }) => {
                        bullets.push(Bullet::new(self.ids.next_id(), BulletStyle::Circle, content));
                    }
                    _ => {
                        entry.content.push(ContentItem::Bullet(Bullet::new(
                            self.ids.next_id(),
                            BulletStyle::Circle,
                            content,
                        )));
                    }
                }
            }
            ContentClass::FreestandingSubheading { content } => {
                entry.content.push(ContentItem::FreestandingSubheading {
                    id: self.ids.next_id(),
                    content,
                });
            }
            ContentClass::Plaintext { content } => {
                entry.content.push(ContentItem::Plaintext {
                    id: self.ids.next_id(),
                    content,
                });
            }
        }
    }
}
