//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, PipelineError, StoreError};

/// This is the foundation error enum. One variant per error domain in the
/// scrivano workspace.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoError, ConfigError};
///
/// let config_err = ConfigError::new("Missing timezone");
/// let err: ScrivanoError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivanoErrorKind {
    /// Model backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Store error
    #[from(StoreError)]
    Store(StoreError),
}

/// Scrivano error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, ConfigError};
///
/// fn might_fail() -> ScrivanoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivano Error: {}", _0)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scrivano operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, ConfigError};
///
/// fn load_key() -> ScrivanoResult<String> {
///     Err(ConfigError::new("OPENAI_API_KEY is not set"))?
/// }
/// ```
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
