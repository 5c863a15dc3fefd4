//! Template rendering and brace escaping.
//!
//! Message content uses single-brace `{name}` placeholders. Doubled braces
//! (`{{` and `}}`) decode to literal braces, so prior model output can be fed
//! back into the conversation after [`escape_braces`] without colliding with
//! placeholder syntax.

use scrivano_error::{PipelineError, PipelineErrorKind};
use std::collections::HashMap;

/// Double every literal brace so the text survives template substitution.
///
/// # Examples
///
/// ```
/// use scrivano_pipeline::template::escape_braces;
///
/// assert_eq!(escape_braces("fn main() {}"), "fn main() {{}}");
/// assert_eq!(escape_braces("no braces"), "no braces");
/// ```
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Render a template by substituting `{name}` placeholders with bindings.
///
/// Doubled braces decode to single literal braces. An unknown placeholder or
/// an unmatched brace is an error rather than a silent pass-through.
///
/// # Errors
///
/// Returns `PipelineErrorKind::UnboundVariable` for a placeholder with no
/// binding and `PipelineErrorKind::UnmatchedBrace` for stray braces.
///
/// # Examples
///
/// ```
/// use scrivano_pipeline::template::render;
/// use std::collections::HashMap;
///
/// let mut bindings = HashMap::new();
/// bindings.insert("title".to_string(), "Intro to Rust".to_string());
///
/// let out = render("Write about {title}.", &bindings).unwrap();
/// assert_eq!(out, "Write about Intro to Rust.");
/// ```
pub fn render(
    template: &str,
    bindings: &HashMap<String, String>,
) -> Result<String, PipelineError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => name.push(inner),
                        None => {
                            return Err(PipelineError::new(PipelineErrorKind::UnmatchedBrace(
                                '{',
                            )))
                        }
                    }
                }
                match bindings.get(&name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(PipelineError::new(PipelineErrorKind::UnboundVariable(
                            name,
                        )))
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(PipelineError::new(PipelineErrorKind::UnmatchedBrace('}')));
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
