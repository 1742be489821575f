//! Coarse section blocks for the block-level editor.
//!
//! A second, simpler view of the same text: each recognized header line
//! starts a new `{title, content}` block whose content is kept as raw text,
//! and everything before the first header lands in a leading "Header"
//! block. Used by the editor surface that presents one textarea per
//! section; the fine-grained model in [`crate::model`] is unaffected.

use serde::{Deserialize, Serialize};

use crate::model::SECTION_TITLES;

/// Title given to the block of text preceding the first recognized header.
pub const PREAMBLE_TITLE: &str = "Header";

/// One coarse editor block: a section title and its raw text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    /// Positional identifier, `"<title>-<index>"`
    pub id: String,

    /// Recognized section title, or `"Header"` for the leading block
    pub title: String,

    /// Raw text between this header and the next, trimmed
    pub content: String,
}

fn header_line_title(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    SECTION_TITLES.iter().find(|t| **t == trimmed).copied()
}

fn push_block(blocks: &mut Vec<SectionBlock>, title: &str, content: &[&str]) {
    blocks.push(SectionBlock {
        id: format!("{}-{}", title, blocks.len()),
        title: title.to_string(),
        content: content.join("\n").trim().to_string(),
    });
}

/// Split text into coarse blocks on recognized header lines.
pub fn split_blocks(text: &str) -> Vec<SectionBlock> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut title = PREAMBLE_TITLE.to_string();
    let mut content: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(header) = header_line_title(line) {
            push_block(&mut blocks, &title, &content);
            title = header.to_string();
            content.clear();
        } else {
            content.push(line);
        }
    }
    push_block(&mut blocks, &title, &content);

    blocks
        .into_iter()
        .filter(|b| !b.title.is_empty() || !b.content.is_empty())
        .collect()
}

/// Join coarse blocks back to text, restoring header lines.
///
/// The leading "Header" block contributes its content only; every other
/// block gets its title line back. Blocks are separated by blank lines.
pub fn join_blocks(blocks: &[SectionBlock]) -> String {
    blocks
        .iter()
        .map(|block| {
            if block.title == PREAMBLE_TITLE {
                block.content.clone()
            } else {
                format!("{}\n{}", block.title, block.content)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\tjane@example.com\n\nEDUCATION\nBSc | MIT\tSep 2018 – Jun 2022\n\nSKILLS\nLanguages: English\n";

    #[test]
    fn test_split_blocks() {
        let blocks = split_blocks(SAMPLE);
        assert_eq!(blocks.len(), 3);

        assert_eq!(blocks[0].title, "Header");
        assert_eq!(blocks[0].content, "Jane Doe\tjane@example.com");
        assert_eq!(blocks[0].id, "Header-0");

        assert_eq!(blocks[1].title, "EDUCATION");
        assert_eq!(blocks[1].content, "BSc | MIT\tSep 2018 – Jun 2022");
        assert_eq!(blocks[1].id, "EDUCATION-1");

        assert_eq!(blocks[2].title, "SKILLS");
        assert_eq!(blocks[2].content, "Languages: English");
    }

    #[test]
    fn test_empty_text_yields_no_blocks() {
        assert!(split_blocks("").is_empty());
    }

    #[test]
    fn test_text_without_headers_is_one_preamble_block() {
        let blocks = split_blocks("just some lines\nand more\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Header");
        assert_eq!(blocks[0].content, "just some lines\nand more");
    }

    #[test]
    fn test_join_restores_header_lines() {
        let blocks = split_blocks(SAMPLE);
        let joined = join_blocks(&blocks);
        assert_eq!(
            joined,
            "Jane Doe\tjane@example.com\n\nEDUCATION\nBSc | MIT\tSep 2018 – Jun 2022\n\nSKILLS\nLanguages: English"
        );
    }

    #[test]
    fn test_split_join_split_is_stable() {
        let once = split_blocks(SAMPLE);
        let again = split_blocks(&join_blocks(&once));
        assert_eq!(once, again);
    }

    #[test]
    fn test_markup_header_line_is_not_a_block_boundary() {
        // The coarse splitter matches raw trimmed lines, unlike the fine
        // classifier which strips markup first.
        let blocks = split_blocks("<b>EDUCATION</b>\nsome content\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Header");
    }
}
