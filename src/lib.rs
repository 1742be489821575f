//! # unresume
//!
//! Heuristic resume text parsing and reconstruction for Rust.
//!
//! This library converts unstructured, tab/whitespace-delimited resume text
//! into a structured document model (header, sections, entries, bullets,
//! skills) and back again, round-trip. The editor mutates the model in
//! place; the AI alignment analysis and the rendering/export collaborators
//! consume the reconstructed text and the serialized model respectively.
//!
//! ## Quick Start
//!
//! ```
//! use unresume::{parse, reconstruct};
//!
//! let text = "Jane Doe\tjane@example.com\n\nSKILLS\nLanguages: English, Spanish\n";
//! let doc = parse(text);
//!
//! assert_eq!(doc.header.as_ref().unwrap().name, "Jane Doe");
//! assert_eq!(reconstruct(&doc), text);
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: any input yields a best-effort model, never an error
//! - **Round-trip fidelity**: reparsing reconstructed text yields a
//!   structurally equal document
//! - **Opaque inline markup**: bold/link tags survive untouched
//! - **Stable ids**: every model node carries an id for editor diffing,
//!   injectable for deterministic tests
//! - **Collaborator contracts**: analysis request/report types and a
//!   rendering visitor, with no transport baked in

pub mod analysis;
pub mod blocks;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use analysis::{
    AnalysisReport, AnalysisRequest, BulletAssessment, KeywordAnalysis, MisalignedPoint,
    ResumeAnalyzer, Strength,
};
pub use blocks::{join_blocks, split_blocks, SectionBlock};
pub use error::{Error, Result};
pub use model::{
    Bullet, BulletStyle, ContentItem, Entry, Header, ResumeDocument, Section, SectionKind, Skill,
    SkillsSection, StandardSection,
};
pub use parser::{DocumentBuilder, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use render::{to_json, to_text, DocumentVisitor, JsonFormat, VisitorAction};

/// Parse resume text into a structured document.
///
/// Never fails: empty or non-resume-shaped input yields a document with no
/// header and no sections. Model ids are random v4 UUIDs; use
/// [`parse_with_ids`] for deterministic ids.
///
/// # Example
///
/// ```
/// let doc = unresume::parse("EDUCATION\nBSc | MIT\tSep 2018 – Jun 2022\n");
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn parse(text: &str) -> ResumeDocument {
    DocumentBuilder::new().parse(text)
}

/// Parse resume text with an injected id generator.
///
/// # Example
///
/// ```
/// use unresume::{parse_with_ids, SequentialIdGenerator};
///
/// let doc = parse_with_ids("SKILLS\nRust\n", SequentialIdGenerator::new());
/// assert_eq!(doc.sections[0].id(), "id-1");
/// ```
pub fn parse_with_ids<G: IdGenerator>(text: &str, ids: G) -> ResumeDocument {
    DocumentBuilder::with_ids(ids).parse(text)
}

/// Reconstruct the canonical text form of a document.
///
/// The right inverse of [`parse`]: for any text `t`,
/// `parse(&reconstruct(&parse(t)))` is structurally equal to `parse(t)`.
/// Total over any well-formed model value.
pub fn reconstruct(doc: &ResumeDocument) -> String {
    render::to_text(doc)
}
