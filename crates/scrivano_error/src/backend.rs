//! Backend error types for model API calls.

/// Specific error conditions for chat-completion backends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BackendErrorKind {
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The API returned a non-success status code.
    #[display("API returned status {}: {}", status, message)]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Response body returned with the error
        message: String,
    },
    /// The response body could not be decoded.
    #[display("Failed to decode API response: {}", _0)]
    Decode(String),
    /// The API returned a response with no usable text content.
    #[display("API response contained no text content")]
    EmptyResponse,
}

/// Error type for model backend operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The specific error condition
    pub kind: BackendErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
