//! Module report handler.
//!
//! Implements the `scenario`, `workflow` and `cases` subcommands, which
//! render one dashboard module without the interactive UI.

use crate::config::DashboardConfig;
use crate::model::DemoCatalog;
use crate::pipeline::{exit_codes, output_report};
use crate::reports::ReportMetadata;
use anyhow::Result;
use std::path::PathBuf;

/// Render the module selected in `config` as a report
#[allow(clippy::needless_pass_by_value)]
pub fn run_report(config: DashboardConfig, config_path: Option<PathBuf>) -> Result<i32> {
    let catalog = DemoCatalog::seeded();
    let metadata = ReportMetadata {
        config_path: config_path.map(|p| p.display().to_string()),
        ..ReportMetadata::new()
    };

    tracing::debug!(module = ?config.module, format = %config.output.format, "rendering module report");
    output_report(&catalog, &config, config.module.section(), metadata)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DashboardModule};
    use crate::reports::ReportFormat;

    #[test]
    fn test_run_report_writes_only_selected_module() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("workflow.md");
        let mut config = DashboardConfig::from_app_config(&AppConfig::default(), DashboardModule::Workflow);
        config.output.format = ReportFormat::Markdown;
        config.output.file = Some(path.clone());
        config.quiet = true;

        let code = run_report(config, None).expect("report");
        assert_eq!(code, exit_codes::SUCCESS);

        let markdown = std::fs::read_to_string(path).expect("read");
        assert!(markdown.contains("Execution tracking"));
        assert!(!markdown.contains("## Case library"));
    }
}
