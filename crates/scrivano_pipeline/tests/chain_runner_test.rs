//! Integration tests for the sequential chain runner.
//!
//! These tests drive the runner with a scripted mock driver that records
//! every request, so stage-to-stage threading can be verified against the
//! recorded call arguments without touching a real API.

use async_trait::async_trait;
use scrivano_core::{GenerateRequest, GenerateResponse, Role};
use scrivano_error::{
    BackendError, BackendErrorKind, PipelineErrorKind, ScrivanoError, ScrivanoErrorKind,
    ScrivanoResult,
};
use scrivano_interface::ChatDriver;
use scrivano_pipeline::{ChainRunner, Stage};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock driver that replays scripted responses and records every request.
struct ScriptedDriver {
    responses: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScrivanoResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(GenerateResponse { text }),
            Some(Err(message)) => {
                Err(BackendError::new(BackendErrorKind::Http(message)).into())
            }
            None => panic!("driver called more times than scripted"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

fn wrapped(body: &str) -> Result<String, String> {
    Ok(format!("==articleStart=={body}==articleEnd=="))
}

fn article_chain<'a>(
    driver: &'a ScriptedDriver,
    passes: usize,
) -> ChainRunner<&'a ScriptedDriver> {
    let mut runner = ChainRunner::new(driver).with_stage(Stage::seed(
        "draft",
        "You write articles about {title}.",
        "Write the article titled {title}.",
    ));
    for i in 0..passes {
        runner = runner.with_stage(Stage::refine(format!("improve-{}", i + 1), "Improve it."));
    }
    runner
}

#[tokio::test]
async fn single_seed_stage_produces_parsed_article() {
    let driver = ScriptedDriver::new(vec![wrapped(" first draft ")]);
    let runner = article_chain(&driver, 0);

    let execution = runner.execute("Intro to Rust").await.unwrap();

    assert_eq!(execution.article, "first draft");
    assert_eq!(execution.history.len(), 2);
    assert_eq!(execution.stage_executions.len(), 1);
    assert_eq!(execution.stage_executions[0].stage_name, "draft");
    assert_eq!(execution.stage_executions[0].sequence_number, 0);
}

#[tokio::test]
async fn title_binding_is_rendered_into_every_message() {
    let driver = ScriptedDriver::new(vec![wrapped("draft")]);
    let runner = article_chain(&driver, 0);

    runner.execute("Intro to Rust").await.unwrap();

    let requests = driver.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].messages[0].content,
        "You write articles about Intro to Rust."
    );
    assert_eq!(
        requests[0].messages[1].content,
        "Write the article titled Intro to Rust."
    );
}

#[tokio::test]
async fn each_stage_receives_predecessor_output() {
    let driver = ScriptedDriver::new(vec![
        wrapped("draft one"),
        wrapped("draft two"),
        wrapped("draft three"),
    ]);
    let runner = article_chain(&driver, 2);

    let execution = runner.execute("T").await.unwrap();

    assert_eq!(execution.article, "draft three");

    let requests = driver.recorded_requests();
    assert_eq!(requests.len(), 3);

    // Second call carries the first article as an assistant echo.
    let echo = &requests[1].messages[2];
    assert_eq!(echo.role, Role::Assistant);
    assert_eq!(echo.content, "draft one");

    // Third call carries the second article, plus the full earlier history.
    let echo = &requests[2].messages[4];
    assert_eq!(echo.role, Role::Assistant);
    assert_eq!(echo.content, "draft two");
    assert_eq!(requests[2].messages.len(), 6);
}

#[tokio::test]
async fn history_grows_by_two_entries_per_refine_stage() {
    let driver = ScriptedDriver::new(vec![
        wrapped("a"),
        wrapped("b"),
        wrapped("c"),
    ]);
    let runner = article_chain(&driver, 2);

    let execution = runner.execute("T").await.unwrap();

    // Seed contributes two entries; each of the two refines adds exactly two.
    assert_eq!(execution.history.len(), 6);

    let requests = driver.recorded_requests();
    assert_eq!(requests[0].messages.len(), 2);
    assert_eq!(requests[1].messages.len(), 4);
    assert_eq!(requests[2].messages.len(), 6);
}

#[tokio::test]
async fn article_braces_are_escaped_in_the_unrendered_history() {
    let driver = ScriptedDriver::new(vec![
        wrapped("code: fn main() {}"),
        wrapped("done"),
    ]);
    let runner = article_chain(&driver, 1);

    let execution = runner.execute("T").await.unwrap();

    // The stored history keeps the escaped form; the rendered request that
    // went over the wire decodes it back to literal braces.
    assert_eq!(execution.history[2].content, "code: fn main() {{}}");
    let requests = driver.recorded_requests();
    assert_eq!(requests[1].messages[2].content, "code: fn main() {}");
}

#[tokio::test]
async fn failing_stage_aborts_and_later_stages_never_run() {
    let driver = ScriptedDriver::new(vec![
        wrapped("draft"),
        Err("rate limited".to_string()),
        wrapped("never reached"),
    ]);
    let runner = article_chain(&driver, 2);

    let err = runner.execute("T").await.unwrap_err();
    assert!(matches!(err.kind(), ScrivanoErrorKind::Backend(_)));

    // Only the first two calls happened; the third stage was never invoked.
    assert_eq!(driver.recorded_requests().len(), 2);
}

#[tokio::test]
async fn missing_section_aborts_the_run() {
    let driver = ScriptedDriver::new(vec![
        wrapped("draft"),
        Ok("no sentinels in this response".to_string()),
        wrapped("never reached"),
    ]);
    let runner = article_chain(&driver, 2);

    let err = runner.execute("T").await.unwrap_err();
    assert_missing_section(&err, "no sentinels in this response");
    assert_eq!(driver.recorded_requests().len(), 2);
}

#[tokio::test]
async fn empty_chain_fails_without_calling_the_driver() {
    let driver = ScriptedDriver::new(vec![]);
    let runner = ChainRunner::new(&driver);

    let err = runner.execute("T").await.unwrap_err();
    match err.kind() {
        ScrivanoErrorKind::Pipeline(e) => {
            assert!(matches!(e.kind, PipelineErrorKind::EmptyChain))
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(driver.recorded_requests().is_empty());
}

fn assert_missing_section(err: &ScrivanoError, expected_raw: &str) {
    match err.kind() {
        ScrivanoErrorKind::Pipeline(e) => match &e.kind {
            PipelineErrorKind::MissingSection(raw) => assert_eq!(raw, expected_raw),
            other => panic!("unexpected pipeline kind: {other:?}"),
        },
        other => panic!("unexpected kind: {other:?}"),
    }
}
