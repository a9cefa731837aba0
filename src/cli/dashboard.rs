//! Dashboard command handler.
//!
//! Implements the `dashboard` subcommand: the interactive UI on a
//! terminal, otherwise a report of the configured sections.

use crate::config::DashboardConfig;
use crate::model::DemoCatalog;
use crate::pipeline::{auto_detect_format, exit_codes, output_report, OutputTarget};
use crate::reports::{ReportFormat, ReportMetadata};
use crate::tui::{run_dashboard_tui, DashboardApp};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the dashboard command
#[allow(clippy::needless_pass_by_value)]
pub fn run_dashboard(config: DashboardConfig, config_path: Option<PathBuf>) -> Result<i32> {
    let catalog = DemoCatalog::seeded();

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    if effective_output == ReportFormat::Tui {
        let mut app = DashboardApp::new(catalog, &config);
        run_dashboard_tui(&mut app, &config.tui).context("terminal dashboard failed")?;
    } else {
        let metadata = ReportMetadata {
            config_path: config_path.map(|p| p.display().to_string()),
            ..ReportMetadata::new()
        };
        output_report(&catalog, &config, config.output.sections, metadata)?;
    }

    Ok(exit_codes::SUCCESS)
}
