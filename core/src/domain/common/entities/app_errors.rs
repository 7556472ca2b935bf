use thiserror::Error;

/// Error taxonomy shared by every domain service. Upstream error detail is
/// logged where it occurs; the messages here are what callers may surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unable to generate recipe. Please try again.")]
    GenerationFailed,

    #[error("Unable to analyze image. Please try again.")]
    AnalysisFailed,

    #[error("Failed to save changes. Please try again.")]
    PersistenceFailed,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal server error")]
    InternalServerError,
}
