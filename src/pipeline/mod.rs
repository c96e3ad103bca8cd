//! Screening pipeline controller
//!
//! Sequences loading, per-candidate scoring, and aggregation as an
//! explicit state machine: `Idle → Loading → Scoring → Aggregating →
//! Done`, with `Failed` terminal from any non-idle state. All failures
//! are fail-fast: no retries, no skipped documents, no partial report.

pub mod candidate;

pub use candidate::CandidateResult;

use crate::error::{Result, ScreenerError};
use crate::input::{InputManager, ResumeDocument};
use crate::llm::client::GenerationClient;
use crate::llm::scorer::CandidateScorer;
use crate::output::aggregator;
use crate::output::report::{ReportMetadata, ScreeningReport};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loading,
    Scoring,
    Aggregating,
    Done,
    Failed,
}

pub struct ScreeningPipeline {
    input: InputManager,
    scorer: CandidateScorer,
    state: RunState,
    model_label: String,
    show_progress: bool,
}

impl ScreeningPipeline {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            input: InputManager::new(),
            scorer: CandidateScorer::new(client),
            state: RunState::Idle,
            model_label: String::new(),
            show_progress: false,
        }
    }

    /// Model name recorded in the report metadata.
    pub fn with_model_label(mut self, label: impl Into<String>) -> Self {
        self.model_label = label.into();
        self
    }

    /// Show a progress bar while scoring (console use only).
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run the full pipeline over the given resumes and job description.
    ///
    /// With zero resumes the pipeline stays `Idle` and no service call is
    /// issued. Otherwise the run ends in `Done` with the full report or in
    /// `Failed` with the triggering error; there is no partial output.
    pub async fn run(&mut self, resume_paths: &[PathBuf], job_path: &Path) -> Result<ScreeningReport> {
        if resume_paths.is_empty() {
            return Err(ScreenerError::InvalidInput(
                "No resumes supplied; nothing to screen".to_string(),
            ));
        }

        match self.execute(resume_paths, job_path).await {
            Ok(report) => {
                self.state = RunState::Done;
                Ok(report)
            }
            Err(e) => {
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    async fn execute(
        &mut self,
        resume_paths: &[PathBuf],
        job_path: &Path,
    ) -> Result<ScreeningReport> {
        let start = Instant::now();

        // Loading: every document must normalize before any scoring starts.
        self.state = RunState::Loading;
        info!("Loading {} resume(s)", resume_paths.len());

        let job_text = self.input.load_job_description(job_path).await?;

        let mut documents: Vec<ResumeDocument> = Vec::with_capacity(resume_paths.len());
        for path in resume_paths {
            documents.push(self.input.load_resume(path).await?);
        }

        // Scoring: an ordered map over the documents. Each call depends only
        // on (resume text, job text); the index keeps submission order for
        // the aggregation step.
        self.state = RunState::Scoring;
        let bar = self.progress_bar(documents.len() as u64);

        let mut raw_outputs: Vec<(ResumeDocument, String)> = Vec::with_capacity(documents.len());
        for doc in documents {
            bar.set_message(doc.source_name.clone());
            let raw = self.scorer.score(&doc, &job_text).await?;
            raw_outputs.push((doc, raw));
            bar.inc(1);
        }
        bar.finish_and_clear();

        // Aggregating: fold the ordered results into the final table.
        self.state = RunState::Aggregating;
        let results: Vec<CandidateResult> = raw_outputs
            .iter()
            .map(|(doc, raw)| CandidateResult::parse(raw, &doc.source_name))
            .collect();

        let table = aggregator::aggregate(&results);

        Ok(ScreeningReport {
            results,
            table,
            metadata: ReportMetadata::new(
                self.model_label.clone(),
                resume_paths.len(),
                start.elapsed().as_millis() as u64,
            ),
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{pos}/{len}] scoring {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}
