//! Disclaimer decoration and front-matter assembly.

/// Disclaimer line placed before and after the article body.
pub const DISCLAIMER: &str = "This article was generated automatically by an \
AI language model. Verify important details against primary sources.";

/// Wrap the article body with the disclaimer banner.
///
/// The banner appears before and after the body, separated from it by
/// horizontal rules.
pub fn decorate(article: &str) -> String {
    format!("\n{DISCLAIMER}\n\n-----\n\n{article}\n\n-----\n\n{DISCLAIMER}")
}

/// Build the final document: front-matter block followed by the body.
///
/// Topics render as a quoted comma list; the body follows immediately after
/// the closing front-matter delimiter.
pub fn front_matter(
    title: &str,
    emoji: &str,
    topics: &[String],
    published: bool,
    body: &str,
) -> String {
    let topics_string = topics
        .iter()
        .map(|topic| format!("\"{topic}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "---\n\
        title: \"{title}\"\n\
        emoji: \"{emoji}\"\n\
        type: \"tech\"\n\
        topics: [{topics_string}]\n\
        published: {published}\n\
        ---\n\
        \n\
        {body}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorate_is_byte_exact() {
        let expected =
            format!("\n{DISCLAIMER}\n\n-----\n\nX\n\n-----\n\n{DISCLAIMER}");
        assert_eq!(decorate("X"), expected);
    }

    #[test]
    fn front_matter_quotes_title_and_topics() {
        let topics = vec!["a".to_string(), "b".to_string()];
        let result = front_matter("T", "🤖", &topics, false, "body");

        assert!(result.starts_with("---\n"));
        assert!(result.contains("title: \"T\""));
        assert!(result.contains("emoji: \"🤖\""));
        assert!(result.contains("type: \"tech\""));
        assert!(result.contains("topics: [\"a\", \"b\"]"));
        assert!(result.contains("published: false"));
    }

    #[test]
    fn body_follows_closing_delimiter() {
        let result = front_matter("T", "🤖", &[], true, "body");
        assert!(result.ends_with("---\n\nbody"));
    }

    #[test]
    fn publish_flag_is_configurable() {
        let published = front_matter("T", "🤖", &[], true, "b");
        assert!(published.contains("published: true"));
    }
}
