//! Integration tests for the resume screener pipeline

use async_trait::async_trait;
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::InputManager;
use resume_screener::llm::GenerationClient;
use resume_screener::pipeline::{RunState, ScreeningPipeline};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Test double for the generation service: records every prompt and
/// replays scripted responses in order.
struct ScriptedClient {
    prompts: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<String>>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().collect()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok("Candidate Name: Fallback, Score: 5, Analysis: generic".to_string())
            })
    }
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

/// Builds a minimal one-page PDF whose only content stream is empty, with
/// a correct xref table, so extraction succeeds but yields no text.
fn textless_pdf_bytes() -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>"
            .to_string(),
        "<< /Length 0 >>\nstream\n\nendstream".to_string(),
    ];
    for (i, body) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_start = buf.len();
    buf.extend_from_slice(b"xref\n0 5\n0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size 5 /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            xref_start
        )
        .as_bytes(),
    );
    buf
}

#[tokio::test]
async fn test_single_resume_scenario() {
    let client = ScriptedClient::new(vec![Ok(
        "Candidate Name: Jane Doe, Score: 8, Analysis: Strong Python and AWS background."
            .to_string(),
    )]);
    let mut pipeline = ScreeningPipeline::new(client.clone()).with_model_label("test-model");

    let report = pipeline
        .run(&[fixture("jane_doe.txt")], &fixture("job_description.txt"))
        .await
        .unwrap();

    assert_eq!(pipeline.state(), RunState::Done);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].name, "Jane Doe");

    let score = report.results[0].score_value().unwrap();
    assert!((0.0..=10.0).contains(&score));

    assert!(report.table.contains("Jane Doe"));
    assert_eq!(report.metadata.candidate_count, 1);
    assert_eq!(report.metadata.model, "test-model");

    // One scorer call, carrying both the resume and the job description.
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Jane Doe, 5 years Python, AWS certified"));
    assert!(prompts[0].contains("Seeking Python engineer with cloud experience"));
}

#[tokio::test]
async fn test_scorer_called_once_per_resume_in_submission_order() {
    let client = ScriptedClient::new(vec![
        Ok("Candidate Name: Jane Doe, Score: 8, Analysis: strong".to_string()),
        Ok("Candidate Name: John Smith, Score: 5, Analysis: partial".to_string()),
        Ok("Candidate Name: Ana Garcia, Score: 7, Analysis: good".to_string()),
    ]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let resumes = [
        fixture("jane_doe.txt"),
        fixture("john_smith.txt"),
        fixture("ana_garcia.txt"),
    ];
    let report = pipeline
        .run(&resumes, &fixture("job_description.txt"))
        .await
        .unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("Jane Doe"));
    assert!(prompts[1].contains("John Smith"));
    assert!(prompts[2].contains("Ana Garcia"));

    // Report rows keep submission order.
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].source_name, "jane_doe");
    assert_eq!(report.results[1].source_name, "john_smith");
    assert_eq!(report.results[2].source_name, "ana_garcia");

    let jane = report.table.find("Jane Doe").unwrap();
    let john = report.table.find("John Smith").unwrap();
    let ana = report.table.find("Ana Garcia").unwrap();
    assert!(jane < john);
    assert!(john < ana);
}

#[tokio::test]
async fn test_zero_resumes_stays_idle() {
    let client = ScriptedClient::new(vec![]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let result = pipeline.run(&[], &fixture("job_description.txt")).await;

    assert!(matches!(result, Err(ScreenerError::InvalidInput(_))));
    assert_eq!(pipeline.state(), RunState::Idle);
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn test_loader_failure_fails_before_any_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let good1 = dir.path().join("good1.txt");
    let bad = dir.path().join("bad.txt");
    let good2 = dir.path().join("good2.txt");
    std::fs::write(&good1, "First resume").unwrap();
    std::fs::write(&bad, [0xff, 0xfe, 0x00, 0x41]).unwrap();
    std::fs::write(&good2, "Third resume").unwrap();

    let client = ScriptedClient::new(vec![]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let result = pipeline
        .run(&[good1, bad, good2], &fixture("job_description.txt"))
        .await;

    assert!(matches!(result, Err(ScreenerError::Decode(_))));
    assert_eq!(pipeline.state(), RunState::Failed);
    // Fail-fast before the scoring state: not a single scorer call.
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn test_scorer_failure_aborts_run() {
    let client = ScriptedClient::new(vec![
        Ok("Candidate Name: Jane Doe, Score: 8, Analysis: strong".to_string()),
        Err(ScreenerError::Inference("service unavailable".to_string())),
    ]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let resumes = [fixture("jane_doe.txt"), fixture("john_smith.txt")];
    let result = pipeline
        .run(&resumes, &fixture("job_description.txt"))
        .await;

    assert!(matches!(result, Err(ScreenerError::Inference(_))));
    assert_eq!(pipeline.state(), RunState::Failed);
    // No third call, no partial report.
    assert_eq!(client.prompts().len(), 2);
}

#[tokio::test]
async fn test_empty_resume_is_still_scored() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "").unwrap();

    let client = ScriptedClient::new(vec![Ok(
        "Candidate Name: empty, Score: 0, Analysis: no content to assess".to_string(),
    )]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let report = pipeline
        .run(&[empty], &fixture("job_description.txt"))
        .await
        .unwrap();

    // An empty document is not an error; the scorer still runs on it.
    assert_eq!(client.prompts().len(), 1);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].score, "0");
}

#[tokio::test]
async fn test_textless_pdf_extracts_empty_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    std::fs::write(&path, textless_pdf_bytes()).unwrap();

    let manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();

    // A page with nothing to extract is not an error, just empty output.
    assert!(text.trim().is_empty());
}

#[tokio::test]
async fn test_textless_pdf_is_still_scored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.pdf");
    std::fs::write(&path, textless_pdf_bytes()).unwrap();

    let client = ScriptedClient::new(vec![Ok(
        "Candidate Name: blank, Score: 0, Analysis: resume is empty".to_string(),
    )]);
    let mut pipeline = ScreeningPipeline::new(client.clone());

    let report = pipeline
        .run(&[path], &fixture("job_description.txt"))
        .await
        .unwrap();

    assert_eq!(pipeline.state(), RunState::Done);
    assert_eq!(client.prompts().len(), 1);
    assert!(client.prompts()[0].contains("Seeking Python engineer"));
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].score, "0");
}

#[tokio::test]
async fn test_garbage_pdf_is_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf at all").unwrap();

    let manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ScreenerError::PdfExtraction(_))));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, "not supported").unwrap();

    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ScreenerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/missing.txt")).await;
    assert!(matches!(result, Err(ScreenerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let doc = manager.load_resume(&fixture("jane_doe.txt")).await.unwrap();

    assert_eq!(doc.source_name, "jane_doe");
    assert!(doc.text.contains("Jane Doe"));
    assert!(doc.text.contains("AWS"));
}

#[tokio::test]
async fn test_unformatted_model_output_still_produces_a_row() {
    let client = ScriptedClient::new(vec![Ok(
        "I think this person is decent for the role overall.".to_string(),
    )]);
    let mut pipeline = ScreeningPipeline::new(client);

    let report = pipeline
        .run(&[fixture("jane_doe.txt")], &fixture("job_description.txt"))
        .await
        .unwrap();

    // Tolerant parsing degrades instead of failing the run.
    assert_eq!(report.results[0].name, "jane_doe");
    assert_eq!(report.results[0].score, "-");
    assert!(report.results[0]
        .analysis
        .contains("decent for the role"));
}
