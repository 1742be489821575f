//! Error types for unresume library.

use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the total parse/reconstruct core.
///
/// Parsing and text reconstruction never fail; errors arise only on the
/// serialization boundary and when decoding analysis collaborator responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The analysis collaborator returned a malformed response.
    #[error("Malformed analysis response: {0}")]
    AnalysisResponse(String),

    /// The analysis collaborator reported a failure of its own.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}
