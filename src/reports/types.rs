//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief summary output
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Dashboard sections a report can contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Every module
    #[default]
    All,
    /// Conflict scenario simulation
    Scenario,
    /// Arbitration workflow
    Workflow,
    /// Case library
    Cases,
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Which sections to include
    pub report_types: Vec<ReportType>,
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_types: vec![ReportType::All],
            title: None,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Create a config for all sections
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a config for specific sections
    #[must_use]
    pub fn with_types(types: Vec<ReportType>) -> Self {
        Self {
            report_types: types,
            ..Default::default()
        }
    }

    /// Check if a section should be included
    #[must_use]
    pub fn includes(&self, report_type: ReportType) -> bool {
        self.report_types.contains(&ReportType::All) || self.report_types.contains(&report_type)
    }

    /// Report title, falling back to the product name.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or("Chain Audit: multi-AI arbitration dashboard")
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp; filled in at render time when absent
    pub generated_at: Option<String>,
    /// Config file the parameters came from
    pub config_path: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Timestamp to print, using now when none was pinned.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_includes_all() {
        let config = ReportConfig::all();
        assert!(config.includes(ReportType::Scenario));
        assert!(config.includes(ReportType::Cases));
    }

    #[test]
    fn test_includes_specific() {
        let config = ReportConfig::with_types(vec![ReportType::Workflow]);
        assert!(config.includes(ReportType::Workflow));
        assert!(!config.includes(ReportType::Scenario));
    }

    #[test]
    fn test_pinned_timestamp() {
        let metadata = ReportMetadata {
            generated_at: Some("2024-03-01T00:00:00Z".to_string()),
            ..ReportMetadata::new()
        };
        assert_eq!(metadata.timestamp(), "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_format_serde_names() {
        let format: ReportFormat = serde_yaml::from_str("markdown").unwrap();
        assert_eq!(format, ReportFormat::Markdown);
        assert_eq!(format.to_string(), "markdown");
    }
}
