//! Prompt templates for candidate scoring

use serde::{Deserialize, Serialize};

/// Prompt template for the per-resume scoring request
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub scoring: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            scoring: SCORING_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    pub resume_content: String,
    pub job_content: String,
    /// Display label for the resume file, offered to the model as a
    /// fallback when the resume body does not state a name.
    pub source_label: String,
}

impl PromptTemplates {
    pub fn render_scoring(&self, params: &ScoringParams) -> String {
        self.scoring
            .replace("{resume}", &params.resume_content)
            .replace("{job}", &params.job_content)
            .replace("{label}", &params.source_label)
    }
}

const SCORING_TEMPLATE: &str = r#"Analyze the following resume content:
'''{resume}'''

Based on this job description:
'''{job}'''

Provide:
1. Candidate Name: Extract from the resume content, or use "{label}" if no name is present.
2. Suitability Score: Rate from 0 to 10 based on the candidate's match to the job description.
3. Short Analysis: Brief summary of strengths and gaps of the candidate.

Output format:
Candidate Name: <name>, Score: <score>, Analysis: <short analysis>"#;
