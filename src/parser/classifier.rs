//! Per-line classification.
//!
//! Pure functions deciding what a single source line is. Rules are applied
//! in precedence order by the builder; the lookahead-dependent case
//! (freestanding subheading vs plaintext) receives the next non-blank line
//! from the scanner instead of re-scanning.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{is_recognized_title, SECTION_TITLES};

/// Classification of a content line inside a standard section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentClass {
    /// A dated entry title line: `Title | Subtitle<TAB>date`
    EntryTitle {
        /// Text left of the `|` separator
        title: String,
        /// Text right of the `|` separator, empty when absent
        subtitle: String,
        /// The trailing date fragment, verbatim
        date: String,
    },
    /// A `• Label: rest` line owning subsequent `o` bullets
    Subheading {
        /// Label left of the colon
        title: String,
        /// Inline text right of the colon, seeds the first owned bullet
        rest: String,
    },
    /// A plain top-level bullet
    Bullet {
        /// Bullet text without the marker
        content: String,
    },
    /// An indented `o` detail bullet
    SubBullet {
        /// Bullet text without the marker
        content: String,
    },
    /// A standalone label line immediately followed by bullets
    FreestandingSubheading {
        /// The line, trimmed
        content: String,
    },
    /// Fallback for anything else
    Plaintext {
        /// The line, trimmed
        content: String,
    },
}

fn markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Month token eventually followed by a 2-4 digit year, or an
        // open-ended Present/Current token.
        Regex::new(
            r"(?i)(?:\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b.*?\b\d{2,4}\b|\bpresent\b|\bcurrent\b)",
        )
        .unwrap()
    })
}

/// Remove inline markup tags, leaving the text between them.
///
/// Used transiently for header and date matching only; stored fields keep
/// their markup as an opaque payload.
pub fn strip_markup(line: &str) -> String {
    markup_re().replace_all(line, "").into_owned()
}

/// Check whether a text fragment reads as a date.
pub fn is_date_fragment(fragment: &str) -> bool {
    date_re().is_match(fragment)
}

/// Match a line against the recognized section titles.
///
/// The trimmed, markup-stripped line must equal a catalog title exactly;
/// partial matches and case variants do not count, so loud all-caps bullet
/// text is never mistaken for a header.
pub fn match_section_header(line: &str) -> Option<&'static str> {
    let stripped = strip_markup(line.trim());
    let candidate = stripped.trim();
    SECTION_TITLES.iter().find(|t| **t == candidate).copied()
}

/// Try the header/contact rule on the first non-blank line.
///
/// Splits on tab; needs at least two fields with a non-numeric first field.
/// Returns `None` when the shape is wrong, which is a normal outcome, not
/// an error: the line then falls through to ordinary classification.
pub fn split_header(line: &str) -> Option<(String, String)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 2 {
        return None;
    }
    let name = fields[0].trim();
    if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let contact = fields[1..].join("\t").trim().to_string();
    Some((name.to_string(), contact))
}

/// Split a skill line on its first colon.
///
/// Lines without a colon get the `"General"` default category.
pub fn split_skill(line: &str) -> (String, String) {
    match line.split_once(':') {
        Some((category, details)) => (category.trim().to_string(), details.trim().to_string()),
        None => ("General".to_string(), line.trim().to_string()),
    }
}

fn starts_with_bullet_marker(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with('•') || t.starts_with('*') || is_sub_bullet(t)
}

fn is_sub_bullet(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    chars.next() == Some('o') && chars.next().is_some_and(char::is_whitespace)
}

/// Classify a content line inside a standard section.
///
/// `next_nonblank` is the scanner's one line of lookahead, consulted only
/// for the freestanding-subheading fallback.
pub fn classify_content(line: &str, next_nonblank: Option<&str>) -> ContentClass {
    // Dated entry title: last tab field reads as a date and the remainder
    // is not itself a section header.
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() >= 2 {
        let last = fields[fields.len() - 1].trim();
        let stripped_date = strip_markup(last);
        if is_date_fragment(stripped_date.trim()) {
            let main = fields[..fields.len() - 1].join("\t");
            let stripped_main = strip_markup(main.trim());
            if !is_recognized_title(stripped_main.trim()) {
                let (title, subtitle) = match main.split_once('|') {
                    Some((t, s)) => (t.trim().to_string(), s.trim().to_string()),
                    None => (main.trim().to_string(), String::new()),
                };
                return ContentClass::EntryTitle {
                    title,
                    subtitle,
                    date: last.to_string(),
                };
            }
        }
    }

    let trimmed = line.trim();

    // Top-level bullet, possibly carrying an inline `Label:` subheading.
    if let Some(rest) = trimmed
        .strip_prefix('•')
        .or_else(|| trimmed.strip_prefix('*'))
    {
        let rest = rest.trim();
        if let Some((label, inline)) = rest.split_once(':') {
            let label = label.trim();
            if !label.is_empty() {
                return ContentClass::Subheading {
                    title: label.to_string(),
                    rest: inline.trim().to_string(),
                };
            }
        }
        return ContentClass::Bullet {
            content: rest.to_string(),
        };
    }

    // Indented detail bullet: a literal `o` marker plus separator.
    if is_sub_bullet(trimmed) {
        return ContentClass::SubBullet {
            content: trimmed[1..].trim().to_string(),
        };
    }

    // Fallback: a line directly followed by bullets acts as a label.
    match next_nonblank {
        Some(next) if starts_with_bullet_marker(next) => ContentClass::FreestandingSubheading {
            content: trimmed.to_string(),
        },
        _ => ContentClass::Plaintext {
            content: trimmed.to_string(),
        },
    }
}
