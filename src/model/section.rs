//! Section, entry and skill types.

use serde::{Deserialize, Serialize};

use super::ContentItem;
use crate::parser::IdGenerator;

/// Recognized section header strings, matched exactly after trimming.
pub const SECTION_TITLES: [&str; 16] = [
    "EDUCATION",
    "PROFESSIONAL EXPERIENCE",
    "EXPERIENCE",
    "SKILLS",
    "TECHNICAL SKILLS",
    "TOOLS",
    "FRAMEWORKS",
    "ANALYTICAL SKILLS",
    "PROJECTS",
    "EXTRACURRICULAR INVOLVEMENT",
    "LEADERSHIP",
    "SUMMARY",
    "OBJECTIVE",
    "PUBLICATIONS",
    "CERTIFICATIONS",
    "AWARDS",
];

/// Subset of [`SECTION_TITLES`] whose sections hold skills, not entries.
pub const SKILLS_TITLES: [&str; 5] = [
    "SKILLS",
    "TECHNICAL SKILLS",
    "TOOLS",
    "FRAMEWORKS",
    "ANALYTICAL SKILLS",
];

/// Check whether a trimmed line is one of the recognized section titles.
pub fn is_recognized_title(title: &str) -> bool {
    SECTION_TITLES.contains(&title)
}

/// Check whether a recognized title denotes a skills section.
pub fn is_skills_title(title: &str) -> bool {
    SKILLS_TITLES.contains(&title)
}

/// Which content shape a section owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Entries (jobs, degrees, roles)
    Standard,
    /// Category/details skill lines
    Skills,
}

impl SectionKind {
    /// The kind a given section title yields.
    pub fn for_title(title: &str) -> Self {
        if is_skills_title(title) {
            SectionKind::Skills
        } else {
            SectionKind::Standard
        }
    }
}

/// One job/degree/role block within a standard section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier
    pub id: String,

    /// Role or degree title, left of the `|` separator
    pub title: String,

    /// Organization or qualifier, right of the `|` separator (may be empty)
    pub subtitle: String,

    /// The trailing date fragment, kept verbatim including markup
    pub date: String,

    /// Content lines in source order
    pub content: Vec<ContentItem>,

    /// Editor flag: render this entry with a box outline
    #[serde(rename = "isBoxed", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_boxed: bool,
}

impl Entry {
    /// Create an empty entry.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            date: date.into(),
            content: Vec::new(),
            is_boxed: false,
        }
    }

    /// The stock entry inserted by the editor's "add experience" action.
    pub fn stock(ids: &mut dyn IdGenerator) -> Self {
        let mut entry = Entry::new(
            ids.next_id(),
            "New Job Title",
            "Company Name",
            "Month Year - Present",
        );
        entry.content.push(ContentItem::Bullet(super::Bullet::new(
            ids.next_id(),
            super::BulletStyle::Disc,
            "Your key achievement...",
        )));
        entry
    }

    /// Append a content item.
    pub fn add_item(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Remove a content item by id.
    pub fn remove_item(&mut self, id: &str) -> Option<ContentItem> {
        let pos = self.content.iter().position(|c| c.id() == id)?;
        Some(self.content.remove(pos))
    }
}

/// A `Category: details` line within a skills section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Stable identifier
    pub id: String,

    /// Category label; `"General"` when the source line had no colon
    pub category: String,

    /// Detail text right of the colon
    pub details: String,
}

impl Skill {
    /// Create a new skill.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            details: details.into(),
        }
    }

    /// The stock skill inserted by the editor's "add skill" action.
    pub fn stock(ids: &mut dyn IdGenerator) -> Self {
        Skill::new(ids.next_id(), "New Skill", "Details about the skill...")
    }
}

/// A section holding dated entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardSection {
    /// Stable identifier
    pub id: String,

    /// Section title as recognized from the source
    pub title: String,

    /// Entries in source order
    pub entries: Vec<Entry>,
}

/// A section holding skill lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsSection {
    /// Stable identifier
    pub id: String,

    /// Section title as recognized from the source
    pub title: String,

    /// Skills in source order
    pub skills: Vec<Skill>,
}

/// A titled block of the resume.
///
/// The kind is fixed at creation from the title and never changes; a section
/// owns either entries or skills, never both. Serialized untagged so the JSON
/// shape matches what the rendering collaborator expects (`entries` vs
/// `skills` field presence).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// Entries (jobs, degrees, roles)
    Standard(StandardSection),
    /// Category/details skill lines
    Skills(SkillsSection),
}

impl Section {
    /// Create an empty section of the kind its title dictates.
    pub fn for_title(title: impl Into<String>, ids: &mut dyn IdGenerator) -> Self {
        let title = title.into();
        match SectionKind::for_title(&title) {
            SectionKind::Skills => Section::Skills(SkillsSection {
                id: ids.next_id(),
                title,
                skills: Vec::new(),
            }),
            SectionKind::Standard => Section::Standard(StandardSection {
                id: ids.next_id(),
                title,
                entries: Vec::new(),
            }),
        }
    }

    /// Get the stable identifier.
    pub fn id(&self) -> &str {
        match self {
            Section::Standard(s) => &s.id,
            Section::Skills(s) => &s.id,
        }
    }

    /// Get the section title.
    pub fn title(&self) -> &str {
        match self {
            Section::Standard(s) => &s.title,
            Section::Skills(s) => &s.title,
        }
    }

    /// Which content shape this section owns.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Standard(_) => SectionKind::Standard,
            Section::Skills(_) => SectionKind::Skills,
        }
    }

    /// Check if the section has no entries/skills.
    ///
    /// Empty sections are dropped entirely on reconstruction.
    pub fn is_empty(&self) -> bool {
        match self {
            Section::Standard(s) => s.entries.is_empty(),
            Section::Skills(s) => s.skills.is_empty(),
        }
    }

    /// Borrow as a standard section, if it is one.
    pub fn as_standard(&self) -> Option<&StandardSection> {
        match self {
            Section::Standard(s) => Some(s),
            Section::Skills(_) => None,
        }
    }

    /// Mutably borrow as a standard section, if it is one.
    pub fn as_standard_mut(&mut self) -> Option<&mut StandardSection> {
        match self {
            Section::Standard(s) => Some(s),
            Section::Skills(_) => None,
        }
    }

    /// Borrow as a skills section, if it is one.
    pub fn as_skills(&self) -> Option<&SkillsSection> {
        match self {
            Section::Standard(_) => None,
            Section::Skills(s) => Some(s),
        }
    }

    /// Mutably borrow as a skills section, if it is one.
    pub fn as_skills_mut(&mut self) -> Option<&mut SkillsSection> {
        match self {
            Section::Standard(_) => None,
            Section::Skills(s) => Some(s),
        }
    }
}

impl StandardSection {
    /// Append an entry.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove an entry by id.
    pub fn remove_entry(&mut self, id: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Mutably borrow an entry by id.
    pub fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

impl SkillsSection {
    /// Append a skill.
    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// Remove a skill by id.
    pub fn remove_skill(&mut self, id: &str) -> Option<Skill> {
        let pos = self.skills.iter().position(|s| s.id == id)?;
        Some(self.skills.remove(pos))
    }

    /// Mutably borrow a skill by id.
    pub fn skill_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SequentialIdGenerator;

    #[test]
    fn test_kind_for_title() {
        assert_eq!(SectionKind::for_title("SKILLS"), SectionKind::Skills);
        assert_eq!(SectionKind::for_title("TOOLS"), SectionKind::Skills);
        assert_eq!(SectionKind::for_title("ANALYTICAL SKILLS"), SectionKind::Skills);
        assert_eq!(SectionKind::for_title("EDUCATION"), SectionKind::Standard);
        assert_eq!(SectionKind::for_title("LEADERSHIP"), SectionKind::Standard);
    }

    #[test]
    fn test_section_kind_fixed_at_creation() {
        let mut ids = SequentialIdGenerator::default();
        let section = Section::for_title("TECHNICAL SKILLS", &mut ids);
        assert_eq!(section.kind(), SectionKind::Skills);
        assert!(section.as_skills().is_some());
        assert!(section.as_standard().is_none());
    }

    #[test]
    fn test_recognized_titles() {
        assert!(is_recognized_title("EDUCATION"));
        assert!(is_recognized_title("AWARDS"));
        // Partial and case-variant matches do not count
        assert!(!is_recognized_title("EDUCATION AND TRAINING"));
        assert!(!is_recognized_title("Education"));
    }

    #[test]
    fn test_entry_edit_ops() {
        let mut ids = SequentialIdGenerator::default();
        let mut entry = Entry::stock(&mut ids);
        assert_eq!(entry.title, "New Job Title");
        assert_eq!(entry.content.len(), 1);

        let bullet_id = entry.content[0].id().to_string();
        assert!(entry.remove_item(&bullet_id).is_some());
        assert!(entry.content.is_empty());
        assert!(entry.remove_item("missing").is_none());
    }

    #[test]
    fn test_section_untagged_serde() {
        let mut ids = SequentialIdGenerator::default();
        let mut section = Section::for_title("SKILLS", &mut ids);
        section
            .as_skills_mut()
            .unwrap()
            .add_skill(Skill::new("s1", "Languages", "English, Spanish"));

        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"skills\""));
        assert!(!json.contains("\"entries\""));

        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), SectionKind::Skills);
    }
}
