//! Stock resume template and default section scaffold.
//!
//! The editor's "new document" path starts from this text; tests use it as
//! a realistic fixture covering every line shape the parser knows.

use crate::model::{ResumeDocument, Section, SectionKind};
use crate::parser::IdGenerator;

/// The stock resume text, tab-delimited with inline markup in the header
/// and date fields.
pub const STOCK_RESUME: &str = "JORDAN PATEL\t<b><a href=\"tel:+1-555-0142\" class=\"text-blue-600 hover:underline\">+1-555-0142</a> | <a href=\"mailto:jordan.patel.ops@example.com\" class=\"text-blue-600 hover:underline\">jordan.patel.ops@example.com</a> | <a href=\"https://linkedin.com/in/jordanpatel\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-600 hover:underline\">linkedin.com/in/jordanpatel</a></b>\n\
\n\
EDUCATION\n\
<b>MSc. Operations & Supply Chain Management | Imperial College London | distinction (top 5% of 180)</b>\t<b>Sep 21 – Sep 22</b>\n\
<b>B.Com (Business Analytics) | Delhi University | first-class distinction (top 10% of 300)</b>\t<b>Jun 17 – Jun 20</b>\n\
Class 12th | School Name, City\tYear\n\
o\tOptional: Percentage/GPA or key achievements.\n\
Class 10th | School Name, City\tYear\n\
o\tOptional: Percentage/GPA.\n\
\n\
PROFESSIONAL EXPERIENCE\n\
Operations Lead | Meridian Components (Meridian Industrial Group)\tMonth Year – Present\n\
• <b>Planning:</b> Owned the S&OP cycle & delivered demand plans to leadership, informing procurement & capacity decisions\n\
o Directed annual <b>operating plan & rolling forecasts</b> across revenue, <b>margins & cost centers</b>, guiding budgetary planning\n\
o Automated order intake via <b>ERP API integration</b>, cutting manual entry & establishing scalable billing processes\n\
o Delivered <b>leadership-facing review deck</b> integrating sales, logistics, & vendor metrics via Excel & PowerPoint\n\
• <b>Process Improvement:</b> Reduced turnaround from 12 days to <b>~3 days</b>, improving on-time delivery by 70% through <b>bottleneck elimination</b>\n\
o Increased <b>line utilization</b> by 8% by applying <b>Lean principles</b> across two production cells\n\
o Reduced stockouts by <b>25%</b> & inventory waste by <b>$310K/year</b> by developing <b>aggregate demand plans</b>\n\
o Hit <b>99.8% inventory accuracy</b> by deploying Python-based ETL workflows for <b>350+ SKUs</b>\n\
\n\
SKILLS\n\
Technical Skills: List relevant programming languages, software, and tools.\n\
Other Skills: List other relevant skills like languages, certifications, etc.\n";

/// Default section scaffold for a blank document, in display order.
pub const DEFAULT_SECTIONS: [(&str, SectionKind); 5] = [
    ("EDUCATION", SectionKind::Standard),
    ("PROFESSIONAL EXPERIENCE", SectionKind::Standard),
    ("PROJECTS", SectionKind::Standard),
    ("SKILLS", SectionKind::Skills),
    ("EXTRACURRICULAR INVOLVEMENT", SectionKind::Standard),
];

/// Build an empty document carrying the default section scaffold.
///
/// All sections start empty, so reconstructing the scaffold immediately
/// yields the empty string until the editor fills something in.
pub fn scaffold_document(ids: &mut dyn IdGenerator) -> ResumeDocument {
    let mut doc = ResumeDocument::new();
    for (title, _) in DEFAULT_SECTIONS {
        doc.add_section(Section::for_title(title, ids));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SequentialIdGenerator;

    #[test]
    fn test_scaffold_kinds_match_titles() {
        let mut ids = SequentialIdGenerator::new();
        let doc = scaffold_document(&mut ids);
        assert_eq!(doc.section_count(), DEFAULT_SECTIONS.len());
        for (section, (title, kind)) in doc.sections.iter().zip(DEFAULT_SECTIONS) {
            assert_eq!(section.title(), title);
            assert_eq!(section.kind(), kind);
        }
    }

    #[test]
    fn test_scaffold_reconstructs_empty() {
        let mut ids = SequentialIdGenerator::new();
        let doc = scaffold_document(&mut ids);
        assert_eq!(crate::reconstruct(&doc), "");
    }

    #[test]
    fn test_stock_resume_parses() {
        let doc = crate::parse(STOCK_RESUME);
        let header = doc.header.as_ref().unwrap();
        assert_eq!(header.name, "JORDAN PATEL");
        assert!(header.contact.contains("linkedin.com/in/jordanpatel"));

        assert_eq!(doc.section_count(), 3);
        assert_eq!(doc.sections[0].title(), "EDUCATION");
        assert_eq!(doc.sections[1].title(), "PROFESSIONAL EXPERIENCE");
        assert_eq!(doc.sections[2].title(), "SKILLS");

        // Bold dated education entries parse as entries with markup intact
        let education = doc.sections[0].as_standard().unwrap();
        assert_eq!(education.entries.len(), 2);
        assert!(education.entries[0].date.contains("<b>"));

        let skills = doc.sections[2].as_skills().unwrap();
        assert_eq!(skills.skills.len(), 2);
        assert_eq!(skills.skills[0].category, "Technical Skills");
    }
}
