//! Analysis collaborator contract.
//!
//! The AI alignment analysis is an external collaborator: it accepts the
//! reconstructed resume text plus a job description and returns a structured
//! critique. This module defines the request/response types and the
//! in-process seam; transport (HTTP, queue, in-memory stub) is the caller's
//! concern.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ResumeDocument;
use crate::render;

/// Input to an analysis run: resume text paired with a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Canonical reconstructed resume text
    pub resume_text: String,

    /// Target job description, verbatim
    pub job_description: String,
}

impl AnalysisRequest {
    /// Build a request from raw resume text.
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description: job_description.into(),
        }
    }

    /// Build a request from a document model, reconstructing its text form.
    pub fn from_document(doc: &ResumeDocument, job_description: impl Into<String>) -> Self {
        Self::new(render::to_text(doc), job_description)
    }
}

/// Strength category assigned to a single resume point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Quantified, specific, aligned with the target role
    Strong,
    /// Adequate but improvable
    Medium,
    /// Vague or off-target
    Weak,
}

/// Keyword overlap between the resume and the job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// Job-description keywords found in the resume
    pub matched_keywords: Vec<String>,

    /// Job-description keywords missing from the resume
    pub missing_keywords: Vec<String>,
}

/// A resume point that works against the target role, with a rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisalignedPoint {
    /// The offending resume point, verbatim
    pub point: String,

    /// Why it misaligns with the job description
    pub reason: String,

    /// Suggested rewrite
    pub suggestion: String,
}

/// Per-bullet strength categorization with justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletAssessment {
    /// The assessed resume point, verbatim
    pub point: String,

    /// Assigned strength category
    pub strength: Strength,

    /// Why the category applies
    pub justification: String,

    /// Optional improvement suggestion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// The structured critique returned by the analysis collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall alignment summary
    pub overall_summary: String,

    /// Keyword match/miss lists
    pub keyword_analysis: KeywordAnalysis,

    /// Misaligned points with rewrites
    pub misaligned_points: Vec<MisalignedPoint>,

    /// Per-bullet strength categorization
    pub categorized_points: Vec<BulletAssessment>,
}

/// Error payload some collaborators return in place of a report.
#[derive(Debug, Deserialize)]
struct CollaboratorError {
    error: String,
}

impl AnalysisReport {
    /// Decode a collaborator's JSON response.
    ///
    /// An `{"error": "..."}` payload maps to [`Error::AnalysisFailed`];
    /// anything else that fails to deserialize maps to
    /// [`Error::AnalysisResponse`].
    pub fn from_json(json: &str) -> Result<Self> {
        if let Ok(failure) = serde_json::from_str::<CollaboratorError>(json) {
            return Err(Error::AnalysisFailed(failure.error));
        }
        serde_json::from_str(json).map_err(|e| Error::AnalysisResponse(e.to_string()))
    }

    /// Points assessed at the given strength.
    pub fn points_with_strength(&self, strength: Strength) -> impl Iterator<Item = &BulletAssessment> {
        self.categorized_points
            .iter()
            .filter(move |p| p.strength == strength)
    }
}

/// In-process seam for the analysis collaborator.
///
/// The core's only obligation toward implementors is to supply
/// syntactically plausible reconstructed text in the request.
pub trait ResumeAnalyzer {
    /// Run the alignment analysis.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport>;
}
