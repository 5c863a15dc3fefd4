//! Storage error types for the title lookup table and article persistence.

/// Specific error conditions for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// The title lookup table has no entry for the given date.
    #[display("No title found for date '{}'", _0)]
    TitleNotFound(String),
    /// Failed to read the title lookup file.
    #[display("Failed to read title file: {}", _0)]
    FileRead(String),
    /// Failed to create the output directory or write the article file.
    #[display("Failed to write article: {}", _0)]
    FileWrite(String),
    /// The title lookup file was not a valid JSON object of date strings.
    #[display("Failed to parse title file as JSON: {}", _0)]
    Json(String),
}

/// Error type for store operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::TitleNotFound("2024-07-29".to_string()));
/// assert!(format!("{}", err).contains("2024-07-29"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The specific error condition
    pub kind: StoreErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
