//! Integration tests for topic and slug extraction.

use async_trait::async_trait;
use scrivano_core::{GenerateRequest, GenerateResponse};
use scrivano_error::ScrivanoResult;
use scrivano_interface::ChatDriver;
use scrivano_pipeline::extract::{extract_slug, extract_topics};
use std::sync::Mutex;

/// Driver that always answers with a fixed string and records the prompt.
struct FixedDriver {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedDriver {
    fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatDriver for FixedDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        let prompt = req
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);
        Ok(GenerateResponse {
            text: self.answer.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-model"
    }
}

#[tokio::test]
async fn topics_are_split_and_trimmed() {
    let driver = FixedDriver::new(" rust , tokio,async ");

    let topics = extract_topics(&driver, "article body").await.unwrap();

    assert_eq!(topics, vec!["rust", "tokio", "async"]);
}

#[tokio::test]
async fn topic_prompt_carries_the_article() {
    let driver = FixedDriver::new("rust");

    extract_topics(&driver, "the finished article").await.unwrap();

    let prompts = driver.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].ends_with("the finished article"));
}

#[tokio::test]
async fn slug_is_trimmed() {
    let driver = FixedDriver::new("\n  rust-tokio-async-introduction \n");

    let slug = extract_slug(&driver, "article body").await.unwrap();

    assert_eq!(slug, "rust-tokio-async-introduction");
}
