//! Report generation for the dashboard.
//!
//! This module renders a [`DashboardSnapshot`] in several formats:
//! - Summary: Compact shell-friendly output
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - CSV: Spreadsheet import
//!
//! The `escape` module provides helpers for embedding catalog text in
//! Markdown and CSV without breaking table formatting.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod snapshot;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use snapshot::DashboardSnapshot;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata, ReportType};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the snapshot
    fn generate_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_report(snapshot, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        // TUI never reaches a reporter; fall back to the terminal summary
        ReportFormat::Auto | ReportFormat::Summary | ReportFormat::Tui => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Parameters;
    use crate::model::{CaseFilter, DemoCatalog};

    #[test]
    fn test_factory_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(create_reporter(ReportFormat::Csv).format(), ReportFormat::Csv);
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_report_to_buffer() {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::default(), CaseFilter::All);
        let mut buf = Vec::new();
        create_reporter(ReportFormat::Markdown)
            .write_report(&snapshot, &ReportConfig::all(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Chain Audit"));
    }
}
