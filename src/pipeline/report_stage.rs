//! Report output stage.
//!
//! Captures the dashboard state for the resolved parameters, renders it
//! in the requested format and writes it to file or stdout.

use crate::config::DashboardConfig;
use crate::model::DemoCatalog;
use crate::reports::{
    create_reporter_with_options, DashboardSnapshot, ReportConfig, ReportError, ReportFormat,
    ReportMetadata, ReportType,
};
use anyhow::Result;

use super::{report_format, write_output, OutputTarget, PipelineError};

/// Render the selected sections to a string.
///
/// `Tui` and `Auto` fall back to the plain-text summary; only the
/// dashboard command hands those formats to the interactive UI.
pub fn render_report(
    catalog: &DemoCatalog,
    config: &DashboardConfig,
    format: ReportFormat,
    report_config: &ReportConfig,
    use_color: bool,
) -> std::result::Result<String, ReportError> {
    let snapshot = DashboardSnapshot::capture(catalog, config.parameters, config.case_filter);
    tracing::debug!(
        base_price = config.parameters.base_price(),
        risk_threshold = config.parameters.risk_threshold(),
        deviation_pct = snapshot.readout.deviation_pct,
        cases = snapshot.cases.len(),
        "captured dashboard snapshot"
    );

    let reporter = create_reporter_with_options(format, use_color);
    reporter.generate_report(&snapshot, report_config)
}

/// Output a report to the configured destination.
///
/// Handles format auto-detection and writing to file or stdout.
pub fn output_report(
    catalog: &DemoCatalog,
    config: &DashboardConfig,
    sections: ReportType,
    metadata: ReportMetadata,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = report_format(config.output.format, &output_target);

    let report_config = ReportConfig {
        report_types: vec![sections],
        metadata,
        ..Default::default()
    };
    let use_color = output_target.wants_color(config.output.no_color);

    let report = render_report(catalog, config, effective_output, &report_config, use_color)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &output_target, config.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DashboardModule};

    fn config() -> DashboardConfig {
        DashboardConfig::from_app_config(&AppConfig::default(), DashboardModule::Scenario)
    }

    #[test]
    fn test_render_report_tui_falls_back_to_summary() {
        let catalog = DemoCatalog::seeded();
        let report = render_report(
            &catalog,
            &config(),
            ReportFormat::Tui,
            &ReportConfig::with_types(vec![ReportType::Scenario]),
            false,
        )
        .expect("render");
        assert!(report.contains("exceeds threshold"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_output_report_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cases.json");
        let mut config = config();
        config.output.file = Some(path.clone());
        config.output.format = ReportFormat::Json;
        config.quiet = true;

        output_report(
            &DemoCatalog::seeded(),
            &config,
            ReportType::Cases,
            ReportMetadata::new(),
        )
        .expect("output");

        let written = std::fs::read_to_string(path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&written).expect("json");
        assert_eq!(value["cases"]["cases"].as_array().map(Vec::len), Some(3));
        assert!(value.get("scenario").is_none());
    }
}
