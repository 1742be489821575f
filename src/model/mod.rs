//! Document model types for the structured resume representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! text parsing and reconstruction. The editor mutates this model in place;
//! the rendering/export collaborator consumes its serialized form directly.

mod content;
mod document;
mod section;

pub use content::{Bullet, BulletStyle, ContentItem};
pub use document::{Header, ResumeDocument};
pub use section::{
    is_recognized_title, is_skills_title, Entry, Section, SectionKind, Skill, SkillsSection,
    StandardSection, SECTION_TITLES, SKILLS_TITLES,
};
