//! Pipeline error types.

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Model output lacked the expected delimited article section.
    ///
    /// Carries the raw model output so the caller can inspect what came back
    /// instead of the sentinel-wrapped article.
    #[display("Article section not found between sentinel tags in model output: {}", _0)]
    MissingSection(String),
    /// A template referenced a variable with no binding.
    #[display("Template variable '{}' has no binding", _0)]
    UnboundVariable(String),
    /// A template contained an unmatched brace.
    #[display("Unmatched '{}' in template", _0)]
    UnmatchedBrace(char),
    /// The chain runner was given no stages to execute.
    #[display("Chain contains no stages")]
    EmptyChain,
    /// The extractor received an empty response to split.
    #[display("Extractor received an empty model response")]
    EmptyExtraction,
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyChain);
/// assert!(format!("{}", err).contains("no stages"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
