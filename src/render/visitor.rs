//! Visitor pattern for customizing document rendering.
//!
//! The rendering/export collaborator consumes the document model directly;
//! this visitor is its hook for painting elements without owning the
//! traversal. Every field handed to a visitor (including embedded inline
//! markup) is safe to interpret as renderable markup.
//!
//! # Example
//!
//! ```
//! use unresume::render::visitor::{render_with_visitor, DocumentVisitor, VisitorAction};
//! use unresume::model::Header;
//!
//! struct AnonymizingVisitor;
//!
//! impl DocumentVisitor for AnonymizingVisitor {
//!     fn visit_header(&mut self, _header: &Header) -> VisitorAction {
//!         VisitorAction::Replace("CANDIDATE\t[redacted]".to_string())
//!     }
//! }
//!
//! let doc = unresume::parse("Jane Doe\tjane@example.com\n\nSKILLS\nRust\n");
//! let text = render_with_visitor(&doc, &mut AnonymizingVisitor);
//! assert!(text.starts_with("CANDIDATE\t[redacted]"));
//! ```

use crate::model::{ContentItem, Entry, Header, ResumeDocument, Section, Skill};

use super::text;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom output.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

/// Trait for visiting document elements during rendering.
///
/// Implement this trait to customize how specific elements are rendered.
/// All methods return `VisitorAction::Continue` by default.
pub trait DocumentVisitor {
    /// Called before rendering the header line.
    fn visit_header(&mut self, header: &Header) -> VisitorAction {
        let _ = header;
        VisitorAction::Continue
    }

    /// Called before rendering a section. Empty sections are compacted
    /// away before this hook fires.
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        let _ = section;
        VisitorAction::Continue
    }

    /// Called before rendering an entry.
    fn visit_entry(&mut self, entry: &Entry) -> VisitorAction {
        let _ = entry;
        VisitorAction::Continue
    }

    /// Called before rendering one content item of an entry.
    fn visit_content_item(&mut self, item: &ContentItem) -> VisitorAction {
        let _ = item;
        VisitorAction::Continue
    }

    /// Called before rendering a skill line.
    fn visit_skill(&mut self, skill: &Skill) -> VisitorAction {
        let _ = skill;
        VisitorAction::Continue
    }
}

/// Visitor that renders everything with the default rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl DocumentVisitor for DefaultVisitor {}

/// Render a document to text, consulting the visitor before each element.
///
/// With [`DefaultVisitor`] the output is identical to
/// [`to_text`](super::to_text).
pub fn render_with_visitor(doc: &ResumeDocument, visitor: &mut dyn DocumentVisitor) -> String {
    let mut chunks: Vec<String> = Vec::new();

    if let Some(header) = &doc.header {
        match visitor.visit_header(header) {
            VisitorAction::Skip => {}
            VisitorAction::Replace(s) => chunks.push(s),
            VisitorAction::Continue => chunks.push(text::header_line(header)),
        }
    }

    for section in &doc.sections {
        if section.is_empty() {
            continue;
        }
        match visitor.visit_section(section) {
            VisitorAction::Skip => continue,
            VisitorAction::Replace(s) => {
                chunks.push(s);
                continue;
            }
            VisitorAction::Continue => {}
        }

        let mut block = String::new();
        block.push_str(&section.title().to_uppercase());
        block.push('\n');
        match section {
            Section::Standard(standard) => {
                for entry in &standard.entries {
                    match visitor.visit_entry(entry) {
                        VisitorAction::Skip => {}
                        VisitorAction::Replace(replacement) => {
                            block.push_str(&replacement);
                            block.push('\n');
                        }
                        VisitorAction::Continue => {
                            block.push_str(&text::entry_title_line(entry));
                            block.push('\n');
                            for item in &entry.content {
                                match visitor.visit_content_item(item) {
                                    VisitorAction::Skip => {}
                                    VisitorAction::Replace(replacement) => {
                                        block.push_str(&replacement);
                                        block.push('\n');
                                    }
                                    VisitorAction::Continue => text::push_item(&mut block, item),
                                }
                            }
                        }
                    }
                }
            }
            Section::Skills(skills) => {
                for skill in &skills.skills {
                    match visitor.visit_skill(skill) {
                        VisitorAction::Skip => {}
                        VisitorAction::Replace(replacement) => {
                            block.push_str(&replacement);
                            block.push('\n');
                        }
                        VisitorAction::Continue => {
                            block.push_str(&text::skill_line(skill));
                            block.push('\n');
                        }
                    }
                }
            }
        }
        chunks.push(block.trim_end().to_string());
    }

    text::finish(chunks.join("\n\n"))
}
