//! Aggregation of candidate results into the summary table
//!
//! A pure formatting fold over the typed results, in the order the
//! resumes were submitted. No model call happens here.

use crate::pipeline::candidate::CandidateResult;

const HEADERS: [&str; 3] = ["Resume / Candidate Name", "Score", "Analysis"];

/// Render the three-column summary table. Row order matches the input
/// order, which the pipeline guarantees to be resume submission order.
pub fn aggregate(results: &[CandidateResult]) -> String {
    // Widths are in characters, not bytes, so non-ASCII names line up.
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or(0);
    let score_width = results
        .iter()
        .map(|r| r.score.chars().count())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    table.push_str(&format!(
        "{:<name_width$} | {:<score_width$} | {}\n",
        HEADERS[0], HEADERS[1], HEADERS[2]
    ));
    table.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(name_width),
        "-".repeat(score_width),
        "-".repeat(HEADERS[2].len())
    ));

    for result in results {
        table.push_str(&format!(
            "{:<name_width$} | {:<score_width$} | {}\n",
            result.name,
            result.score,
            single_line(&result.analysis)
        ));
    }

    table
}

/// Analysis text may span lines in the raw model output; rows are
/// single-line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
