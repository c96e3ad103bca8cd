//! Output formatters for the screening report

use crate::config::OutputFormat;
use crate::error::{Result, ScreenerError};
use crate::output::report::ScreeningReport;
use colored::Colorize;
use std::path::Path;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
}

/// Console formatter with colored headers
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let title = if self.use_colors {
            "Resume Score Table".bold().cyan().to_string()
        } else {
            "Resume Score Table".to_string()
        };

        let footer = format!(
            "{} candidate(s) scored by {} in {}ms",
            report.metadata.candidate_count,
            report.metadata.model,
            report.metadata.processing_time_ms
        );
        let footer = if self.use_colors {
            footer.dimmed().to_string()
        } else {
            footer
        };

        Ok(format!("{}\n\n{}\n{}", title, report.table, footer))
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::from("# Resume Score Table\n\n");
        out.push_str("| Resume / Candidate Name | Score | Analysis |\n");
        out.push_str("|---|---|---|\n");

        for result in &report.results {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&result.name),
                escape_cell(&result.score),
                escape_cell(&result.analysis)
            ));
        }

        out.push_str(&format!(
            "\nGenerated {} by {} ({} candidates, {}ms)\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.model,
            report.metadata.candidate_count,
            report.metadata.processing_time_ms
        ));

        Ok(out)
    }
}

/// Markdown table cells cannot hold raw pipes or newlines.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coordinates formatters and writes saved reports.
pub struct ReportGenerator {
    use_colors: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter::new(self.use_colors).format_report(report),
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    pub fn save(&self, report: &ScreeningReport, format: &OutputFormat, path: &Path) -> Result<()> {
        // Saved console output carries no ANSI codes.
        let content = match format {
            OutputFormat::Console => ConsoleFormatter::new(false).format_report(report)?,
            other => self.format(report, other)?,
        };

        std::fs::write(path, content).map_err(|e| {
            ScreenerError::OutputFormatting(format!(
                "Failed to save report to '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
