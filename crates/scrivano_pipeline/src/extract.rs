//! Topic and slug extraction from finished articles.
//!
//! Each extractor issues a single model call with a fixed few-shot prompt and
//! splits the comma-delimited response. The model's adherence to cardinality
//! and character-set instructions is trusted, not enforced; only the
//! split/trim logic is covered by tests.

use crate::prompts;
use scrivano_core::{GenerateRequest, Message, Role};
use scrivano_error::ScrivanoResult;
use scrivano_interface::ChatDriver;

/// Derive topic tags from the final article text.
///
/// # Errors
///
/// Propagates model call failures from the driver.
#[tracing::instrument(skip(driver, article), fields(article_length = article.len()))]
pub async fn extract_topics<D: ChatDriver>(
    driver: &D,
    article: &str,
) -> ScrivanoResult<Vec<String>> {
    let prompt = format!("{}\n\n{}", prompts::topics_prompt(), article);
    let request = GenerateRequest {
        messages: vec![Message::new(Role::User, prompt)],
        ..Default::default()
    };

    let response = driver.generate(&request).await?;
    Ok(split_topics(&response.text))
}

/// Derive a URL-safe slug from the final article text.
///
/// # Errors
///
/// Propagates model call failures from the driver.
#[tracing::instrument(skip(driver, article), fields(article_length = article.len()))]
pub async fn extract_slug<D: ChatDriver>(driver: &D, article: &str) -> ScrivanoResult<String> {
    let prompt = format!("{}\n\n{}", prompts::slug_prompt(), article);
    let request = GenerateRequest {
        messages: vec![Message::new(Role::User, prompt)],
        ..Default::default()
    };

    let response = driver.generate(&request).await?;
    Ok(response.text.trim().to_string())
}

/// Split a comma-delimited model response into trimmed, non-empty tags.
pub fn split_topics(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_trims() {
        let topics = split_topics("rust, tokio , async");
        assert_eq!(topics, vec!["rust", "tokio", "async"]);
    }

    #[test]
    fn drops_empty_entries() {
        let topics = split_topics("rust,, ,sql,");
        assert_eq!(topics, vec!["rust", "sql"]);
    }

    #[test]
    fn empty_response_yields_no_topics() {
        assert!(split_topics("").is_empty());
        assert!(split_topics("   ").is_empty());
    }

    #[test]
    fn single_tag_passes_through() {
        assert_eq!(split_topics("database"), vec!["database"]);
    }
}
