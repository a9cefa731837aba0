//! CSV report generator.
//!
//! Emits one `#`-headed block per section, suitable for spreadsheet
//! import and data analysis pipelines.

use super::escape::csv_field;
use super::{DashboardSnapshot, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportType};
use std::fmt::Write;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        let catalog = snapshot.catalog;

        if config.includes(ReportType::Scenario) {
            let readout = &snapshot.readout;
            content.push_str("# Scenario\n");
            content.push_str(
                "Supplier,Base Price,Risk Threshold,Current Price,Deviation %,Deviation Label,Risk Label\n",
            );
            writeln!(
                content,
                "{},{:.1},{},{:.2},{:.1},{},{}",
                csv_field(snapshot.supplier.id),
                readout.base_price,
                readout.risk_threshold,
                readout.current_price,
                readout.deviation_pct,
                csv_field(readout.deviation.label()),
                csv_field(readout.risk.label())
            )?;
        }

        if config.includes(ReportType::Workflow) {
            content.push_str("\n# Classification\n");
            content.push_str("Type,Description,Channel,Time Limit h\n");
            for rule in catalog.classification() {
                writeln!(
                    content,
                    "{},{},{},{}",
                    rule.conflict_type.as_str(),
                    csv_field(rule.description),
                    csv_field(rule.channel),
                    rule.time_limit_hours
                )?;
            }

            content.push_str("\n# Provenance\n");
            content.push_str("Department,Indicator,Value,Source,Status\n");
            for row in catalog.provenance() {
                writeln!(
                    content,
                    "{},{},{},{},{}",
                    row.department.label(),
                    csv_field(row.indicator),
                    csv_field(row.value),
                    csv_field(row.source),
                    csv_field(row.status.label())
                )?;
            }

            content.push_str("\n# Confidence\n");
            content.push_str("Department,Percent,Note\n");
            for confidence in catalog.confidences() {
                writeln!(
                    content,
                    "{},{},{}",
                    confidence.department.label(),
                    confidence.percent,
                    csv_field(confidence.note.unwrap_or(""))
                )?;
            }

            content.push_str("\n# Timeline\n");
            content.push_str("Stage,Status,Duration h,Owner\n");
            for stage in catalog.timeline() {
                writeln!(
                    content,
                    "{},{},{},{}",
                    csv_field(stage.stage),
                    csv_field(stage.status.label()),
                    stage.duration_hours,
                    csv_field(stage.owner)
                )?;
            }

            content.push_str("\n# Tracking\n");
            content.push_str("Task,Executor,Supervisor,Criterion\n");
            for task in catalog.tasks() {
                writeln!(
                    content,
                    "{},{},{},{}",
                    csv_field(task.task),
                    csv_field(task.executor),
                    csv_field(task.supervisor),
                    csv_field(task.criterion)
                )?;
            }

            content.push_str("\n# Data flows\n");
            content.push_str("Channel,Data,Status,Latency ms\n");
            for flow in catalog.flows() {
                writeln!(
                    content,
                    "{},{},{},{}",
                    csv_field(flow.channel),
                    csv_field(flow.data_type),
                    flow.status.label(),
                    flow.latency_ms
                )?;
            }
        }

        if config.includes(ReportType::Cases) {
            content.push_str("\n# Cases\n");
            content.push_str("Case,Type,Disposition,Duration h,Retention\n");
            for case in &snapshot.cases {
                writeln!(
                    content,
                    "{},{},{},{},{}",
                    csv_field(case.case_id),
                    case.conflict_type.as_str(),
                    csv_field(case.disposition),
                    case.duration_hours,
                    csv_field(case.retention)
                )?;
            }
        }

        Ok(content.trim_start().to_string())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Parameters;
    use crate::model::{CaseFilter, DemoCatalog};

    #[test]
    fn test_scenario_row() {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::new(14.2, 75), CaseFilter::All);
        let csv = CsvReporter::new()
            .generate_report(&snapshot, &ReportConfig::with_types(vec![ReportType::Scenario]))
            .unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("# Scenario"));
        assert_eq!(
            lines.nth(1),
            Some("\"RF-202403\",14.2,75,1.58,-88.9,\"exceeds threshold\",\"medium\"")
        );
    }

    #[test]
    fn test_workflow_exports_every_table() {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::default(), CaseFilter::All);
        let csv = CsvReporter::new()
            .generate_report(&snapshot, &ReportConfig::with_types(vec![ReportType::Workflow]))
            .unwrap();
        let headings: Vec<&str> = csv.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(
            headings,
            ["# Classification", "# Provenance", "# Confidence", "# Timeline", "# Tracking", "# Data flows"]
        );
        assert!(csv.contains(
            "single,\"Single indicator out of bounds\",\"Automatic compensation negotiation\",2"
        ));
        assert!(csv.contains("\"Preparation\","));
        let provenance_rows = csv
            .split("# Provenance\n")
            .nth(1)
            .map(|block| block.split("\n\n").next().unwrap_or("").lines().count() - 1);
        assert_eq!(provenance_rows, Some(catalog.provenance().len()));
    }

    #[test]
    fn test_cases_block_has_all_rows() {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::default(), CaseFilter::All);
        let csv = CsvReporter::new()
            .generate_report(&snapshot, &ReportConfig::with_types(vec![ReportType::Cases]))
            .unwrap();
        assert!(csv.starts_with("# Cases"));
        assert_eq!(csv.lines().count(), 5);
    }
}
