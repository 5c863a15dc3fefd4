//! Fixed prompt message builders for each pipeline stage.
//!
//! These are pure functions returning static instruction text. The `{title}`
//! placeholder is interpolated at invocation time by the chain runner.

/// System persona for the article-writing conversation.
pub fn system_message() -> &'static str {
    "\
You are a veteran software engineer and technical writer. You write long-form \
technical articles in Markdown for an audience of working developers. Your \
articles are accurate, practical, and rich with concrete examples. You always \
follow formatting instructions exactly."
}

/// Instructions for the initial draft stage.
pub fn generate_prompt() -> &'static str {
    "\
Write a comprehensive technical article titled \"{title}\".

Requirements:
- Use ## headings for major sections and ### or #### headings for subsections.
- Include an introduction and a summary section.
- Aim for 12,000 to 16,000 characters of substantive content.
- Include practical, concrete code samples fenced with triple backticks and \
an appropriate language tag.
- Explain technical terms when they first appear.
- Begin the article body with the ==articleStart== tag and end it with the \
==articleEnd== tag. Place all of the article's main content between these \
tags, and nothing but the title or brief notes outside them."
}

/// Instructions for an improvement pass.
pub fn improve_prompt() -> &'static str {
    "\
Treat the previous article as 60% complete and revise it to 100%. Make each \
section more detailed and provide more information so the article delivers \
real value to the reader.

Always observe the following:
- Begin the article body with the ==articleStart== tag and end it with the \
==articleEnd== tag. Place all of the article's main content between these tags.
- Double-check that the whole article is correctly enclosed by the \
==articleStart== and ==articleEnd== tags, with nothing but the title or brief \
notes outside them."
}

/// Instructions for the diagram-insertion pass.
pub fn add_diagram_prompt() -> &'static str {
    "\
Add at least one mermaid.js diagram to the previous article where it best \
supports the content. Introduce each diagram with a short explanation before \
it and connect it to the surrounding text.

Always observe the following:
- Fence each diagram with triple backticks and the mermaid language tag.
- Keep the rest of the article intact apart from the insertions.
- Begin the article body with the ==articleStart== tag and end it with the \
==articleEnd== tag. Place all of the article's main content between these tags."
}

/// Few-shot prompt for topic tag extraction.
///
/// The article text is appended after this prompt in a single user message.
pub fn topics_prompt() -> &'static str {
    "\
Extract up to five short topic tags for the following article. Answer with \
only the tags, comma-separated, in lowercase. Do not add any commentary.

Example article: An introduction to asynchronous programming in Rust with \
tokio, covering tasks, channels, and common pitfalls.
Example answer: rust, tokio, async, concurrency

Example article: A hands-on SQL tutorial for beginners using MySQL, from \
SELECT basics through joins and indexes.
Example answer: mysql, sql, database, tutorial

Article:"
}

/// Few-shot prompt for URL slug extraction.
///
/// The article text is appended after this prompt in a single user message.
pub fn slug_prompt() -> &'static str {
    "\
Produce a URL-safe slug for the following article. Answer with only the slug: \
lowercase letters, digits, and hyphens, between 12 and 50 characters. Do not \
add any commentary.

Example article: An introduction to asynchronous programming in Rust with \
tokio, covering tasks, channels, and common pitfalls.
Example answer: rust-tokio-async-introduction

Example article: A hands-on SQL tutorial for beginners using MySQL, from \
SELECT basics through joins and indexes.
Example answer: mysql-sql-tutorial-for-beginners

Article:"
}
