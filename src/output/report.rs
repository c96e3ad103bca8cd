//! Screening report structures

use crate::pipeline::candidate::CandidateResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The run's sole output: all candidate results, the rendered summary
/// table, and generation metadata. Never partially constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub results: Vec<CandidateResult>,
    pub table: String,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub candidate_count: usize,
    pub processing_time_ms: u64,
    pub screener_version: String,
}

impl ReportMetadata {
    pub fn new(model: String, candidate_count: usize, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            model,
            candidate_count,
            processing_time_ms,
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
