//! Sentinel-delimited section extraction from model output.

use regex::Regex;
use scrivano_error::{PipelineError, PipelineErrorKind};
use std::sync::OnceLock;

/// Start sentinel delimiting the usable article body.
pub const ARTICLE_START: &str = "==articleStart==";

/// End sentinel delimiting the usable article body.
pub const ARTICLE_END: &str = "==articleEnd==";

fn section_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)==articleStart==(.*?)==articleEnd==")
            .expect("section regex is valid")
    })
}

/// Extracts the article body between the sentinel tags.
///
/// Downstream stages assume the article text is exactly the delimited body,
/// never including the sentinels or any commentary the model added around
/// them. When no bounded region exists the parse fails rather than degrading
/// to the whole input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser;

impl SectionParser {
    /// Create a new section parser.
    pub fn new() -> Self {
        Self
    }

    /// Extract the trimmed substring between the first start sentinel and
    /// the first subsequent end sentinel.
    ///
    /// # Errors
    ///
    /// Returns `PipelineErrorKind::MissingSection` carrying the raw text when
    /// no delimited region exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivano_pipeline::SectionParser;
    ///
    /// let parser = SectionParser::new();
    /// let body = parser.parse("==articleStart== # Intro ==articleEnd==").unwrap();
    /// assert_eq!(body, "# Intro");
    /// ```
    pub fn parse(&self, text: &str) -> Result<String, PipelineError> {
        match section_regex().captures(text) {
            Some(captures) => Ok(captures[1].trim().to_string()),
            None => {
                tracing::error!(
                    response_length = text.len(),
                    "Model output lacked the delimited article section"
                );
                Err(PipelineError::new(PipelineErrorKind::MissingSection(
                    text.to_string(),
                )))
            }
        }
    }

    /// Instruction text telling the model how to delimit its output.
    pub fn format_instructions(&self) -> &'static str {
        "Wrap the main content of the article between ==articleStart== and ==articleEnd== tags."
    }
}
