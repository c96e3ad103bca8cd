//! Typed candidate result parsed from raw model output

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// Fixed patterns, compiled once for the whole run.
fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)candidate\s*name\s*:\s*([^,\n]+)").unwrap())
}

fn score_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bscore\s*:\s*([^,\n]+)").unwrap())
}

fn analysis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)analysis\s*:\s*(.+)").unwrap())
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap())
}

/// One candidate's screening result, carried as three typed fields
/// between scoring and aggregation.
///
/// The score is kept as the verbatim token the model produced, even when
/// out of range or non-numeric; `score_value` offers a best-effort numeric
/// reading for callers that want one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResult {
    pub name: String,
    pub score: String,
    pub analysis: String,
    /// Display label of the resume file this result came from.
    pub source_name: String,
}

impl CandidateResult {
    /// Tolerantly parse raw model output in the requested
    /// `Candidate Name: <name>, Score: <score>, Analysis: <analysis>`
    /// format, accepting both single-line and one-label-per-line variants.
    ///
    /// Parsing never fails: any field the output does not yield falls back
    /// to the source label, `-`, or the raw text respectively.
    pub fn parse(raw: &str, source_name: &str) -> Self {
        let name = name_re()
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| source_name.to_string());

        let score = score_re()
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "-".to_string());

        let analysis = analysis_re()
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| raw.trim().to_string());

        Self {
            name,
            score,
            analysis,
            source_name: source_name.to_string(),
        }
    }

    /// Best-effort numeric reading of the score token ("8", "8.5", "8/10").
    pub fn score_value(&self) -> Option<f32> {
        number_re()
            .find(&self.score)
            .and_then(|m| m.as_str().parse::<f32>().ok())
    }
}
