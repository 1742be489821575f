//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Section, SectionKind};

/// The name/contact line at the top of a resume.
///
/// Contact text may embed inline markup (bold, links); it is carried as an
/// opaque payload and never reparsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    /// Candidate name, left of the tab separator
    pub name: String,

    /// Contact text, everything right of the first tab
    pub contact: String,
}

/// A parsed resume document.
///
/// Created fresh on every parse, mutated in place by editor operations, and
/// discarded once reconstructed to text. The text string is the durable
/// representation; the model has no persistence of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// The name/contact header, absent when the first line had no tab split
    pub header: Option<Header>,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            header: None,
            sections: Vec::new(),
        }
    }

    /// Check if the document has no header and no sections.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Remove a section by id.
    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        let pos = self.sections.iter().position(|s| s.id() == id)?;
        Some(self.sections.remove(pos))
    }

    /// Borrow a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Mutably borrow a section by id.
    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    /// Find the first section with the given title.
    pub fn section_by_title(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title() == title)
    }

    /// Total entry count across standard sections.
    pub fn entry_count(&self) -> usize {
        self.sections
            .iter()
            .filter_map(Section::as_standard)
            .map(|s| s.entries.len())
            .sum()
    }

    /// Total skill count across skills sections.
    pub fn skill_count(&self) -> usize {
        self.sections
            .iter()
            .filter_map(Section::as_skills)
            .map(|s| s.skills.len())
            .sum()
    }

    /// Count sections of a given kind.
    pub fn count_kind(&self, kind: SectionKind) -> usize {
        self.sections.iter().filter(|s| s.kind() == kind).count()
    }
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::new()
    }
}
