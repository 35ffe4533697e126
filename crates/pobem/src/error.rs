//! Error types for the BEM transform.

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around a transform run.
///
/// Rewriting itself never fails; errors come from reading the stylesheet
/// or the delimiter configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet could not be parsed.
    #[error(transparent)]
    Stylesheet(#[from] pobem_stylesheet::Error),

    /// A delimiter environment variable holds non-unicode data.
    #[error("Environment variable '{name}' is not valid unicode")]
    InvalidEnvironment { name: String },
}

impl Error {
    /// Create an environment error.
    pub fn invalid_environment(name: impl Into<String>) -> Self {
        Self::InvalidEnvironment { name: name.into() }
    }
}
