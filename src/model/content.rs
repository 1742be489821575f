//! Entry content types: bullets, subheadings and plain text lines.

use serde::{Deserialize, Serialize};

/// Bullet glyph style.
///
/// The source text may use `•` or `*` for top-level bullets; both normalize
/// to [`BulletStyle::Disc`] on parse. Indented detail bullets use a literal
/// `o` marker and map to [`BulletStyle::Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletStyle {
    /// Top-level bullet, rendered as `•`
    #[serde(rename = "•")]
    Disc,
    /// Indented detail bullet, rendered as `o`
    #[serde(rename = "o")]
    Circle,
}

impl BulletStyle {
    /// The glyph emitted for this style on reconstruction.
    pub fn marker(self) -> char {
        match self {
            BulletStyle::Disc => '•',
            BulletStyle::Circle => 'o',
        }
    }
}

/// A single bullet line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Stable identifier for list-key diffing
    pub id: String,

    /// Bullet glyph style
    pub style: BulletStyle,

    /// Bullet text, may embed inline markup as an opaque payload
    pub content: String,
}

impl Bullet {
    /// Create a new bullet.
    pub fn new(id: impl Into<String>, style: BulletStyle, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style,
            content: content.into(),
        }
    }
}

/// One content line within an entry.
///
/// The classifier assigns every line exactly one of these variants; there is
/// no fallthrough shape. Ambiguous lines end up as [`ContentItem::Plaintext`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A standalone bullet, top-level (`•`) or indented (`o`)
    Bullet(Bullet),

    /// A bulleted `Label:` line that owns the `o` bullets following it
    Subheading {
        /// Stable identifier
        id: String,
        /// Label text left of the colon
        title: String,
        /// Owned detail bullets, in source order
        bullets: Vec<Bullet>,
    },

    /// A standalone label line followed by bullets, but not itself bulleted
    FreestandingSubheading {
        /// Stable identifier
        id: String,
        /// The line, verbatim
        content: String,
    },

    /// Fallback: any line that matched no other rule
    Plaintext {
        /// Stable identifier
        id: String,
        /// The line, verbatim
        content: String,
    },
}

impl ContentItem {
    /// Get the stable identifier of this item.
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Bullet(b) => &b.id,
            ContentItem::Subheading { id, .. } => id,
            ContentItem::FreestandingSubheading { id, .. } => id,
            ContentItem::Plaintext { id, .. } => id,
        }
    }

    /// Check if this item is a subheading.
    pub fn is_subheading(&self) -> bool {
        matches!(self, ContentItem::Subheading { .. })
    }

    /// Plain text of the item, without markers and with owned bullets joined.
    pub fn plain_text(&self) -> String {
        match self {
            ContentItem::Bullet(b) => b.content.clone(),
            ContentItem::Subheading { title, bullets, .. } => {
                let mut out = format!("{}:", title);
                for bullet in bullets {
                    out.push('\n');
                    out.push_str(&bullet.content);
                }
                out
            }
            ContentItem::FreestandingSubheading { content, .. } => content.clone(),
            ContentItem::Plaintext { content, .. } => content.clone(),
        }
    }
}
