//! Per-candidate scoring via the text-generation service

use crate::error::{Result, ScreenerError};
use crate::input::ResumeDocument;
use crate::llm::client::GenerationClient;
use crate::llm::prompts::{PromptTemplates, ScoringParams};
use log::debug;
use std::sync::Arc;

/// Issues one generation request per resume and returns the raw response
/// verbatim. Each call is a pure function of (resume text, job text):
/// there is no shared state between candidates, so calls may run in any
/// order as long as the caller restores submission order afterwards.
pub struct CandidateScorer {
    client: Arc<dyn GenerationClient>,
    templates: PromptTemplates,
}

impl CandidateScorer {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            templates: PromptTemplates::default(),
        }
    }

    /// Score one resume against the job description.
    ///
    /// The response is unstructured free text; no schema is enforced here.
    /// A successful call never yields an empty string.
    pub async fn score(&self, resume: &ResumeDocument, job_text: &str) -> Result<String> {
        let prompt = self.templates.render_scoring(&ScoringParams {
            resume_content: resume.text.clone(),
            job_content: job_text.to_string(),
            source_label: resume.source_name.clone(),
        });

        debug!(
            "Scoring '{}' ({} resume chars, {} job chars)",
            resume.source_name,
            resume.text.len(),
            job_text.len()
        );

        let output = self.client.generate(&prompt).await?;

        if output.trim().is_empty() {
            return Err(ScreenerError::Inference(format!(
                "Service returned empty output for '{}'",
                resume.source_name
            )));
        }

        Ok(output)
    }
}
