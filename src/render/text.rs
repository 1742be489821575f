//! Text reconstruction: the inverse of parsing.
//!
//! A deterministic linear walk over the document model producing the
//! canonical line-oriented form consumed by the analysis prompt and by
//! save/export. Reconstruction is a right inverse of parsing: reparsing the
//! output yields a structurally equal document, though glyphs are
//! normalized (`*` bullets come back as `•`) and empty sections are
//! compacted away.

use crate::model::{BulletStyle, ContentItem, Entry, Header, ResumeDocument, Section, Skill};

/// Reconstruct the canonical text form of a document.
///
/// Total over any well-formed model value; a document with no header and no
/// non-empty sections yields the empty string.
pub fn to_text(doc: &ResumeDocument) -> String {
    let mut out = String::new();

    if let Some(header) = &doc.header {
        out.push_str(&header_line(header));
        out.push_str("\n\n");
    }

    let mut first = true;
    for section in &doc.sections {
        // Sections with zero entries/skills are dropped entirely; this
        // keeps repeated editor round trips from accumulating placeholder
        // header lines.
        if section.is_empty() {
            continue;
        }
        if !first {
            out.push('\n');
        }
        first = false;

        out.push_str(&section.title().to_uppercase());
        out.push('\n');
        match section {
            Section::Standard(s) => {
                for entry in &s.entries {
                    push_entry(&mut out, entry);
                }
            }
            Section::Skills(s) => {
                for skill in &s.skills {
                    out.push_str(&skill_line(skill));
                    out.push('\n');
                }
            }
        }
    }

    finish(out)
}

pub(crate) fn finish(out: String) -> String {
    let trimmed = out.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

pub(crate) fn header_line(header: &Header) -> String {
    format!("{}\t{}", header.name, header.contact)
}

pub(crate) fn entry_title_line(entry: &Entry) -> String {
    if entry.subtitle.is_empty() {
        format!("{}\t{}", entry.title, entry.date)
    } else {
        format!("{} | {}\t{}", entry.title, entry.subtitle, entry.date)
    }
}

pub(crate) fn skill_line(skill: &Skill) -> String {
    if skill.category == "General" {
        skill.details.clone()
    } else {
        format!("{}: {}", skill.category, skill.details)
    }
}

pub(crate) fn push_entry(out: &mut String, entry: &Entry) {
    out.push_str(&entry_title_line(entry));
    out.push('\n');
    for item in &entry.content {
        push_item(out, item);
    }
}

pub(crate) fn push_item(out: &mut String, item: &ContentItem) {
    match item {
        ContentItem::Bullet(b) => match b.style {
            BulletStyle::Disc => {
                out.push_str("• ");
                out.push_str(&b.content);
                out.push('\n');
            }
            BulletStyle::Circle => {
                out.push_str("  o ");
                out.push_str(&b.content);
                out.push('\n');
            }
        },
        ContentItem::Subheading { title, bullets, .. } => {
            out.push_str("• ");
            out.push_str(title);
            out.push_str(":\n");
            for bullet in bullets {
                out.push_str("  o ");
                out.push_str(&bullet.content);
                out.push('\n');
            }
        }
        ContentItem::FreestandingSubheading { content, .. }
        | ContentItem::Plaintext { content, .. } => {
            out.push_str(content);
            out.push('\n');
        }
    }
}
