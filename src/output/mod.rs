//! Report aggregation and output formatting

pub mod aggregator;
pub mod formatter;
pub mod report;

pub use formatter::ReportGenerator;
pub use report::ScreeningReport;
