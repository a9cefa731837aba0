//! JSON report generator.

use super::{DashboardSnapshot, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportType};
use crate::mapper::{MetricCard, Parameters};
use crate::model::{
    Arbitration, CaseFilter, CaseRecord, ClassificationRule, Confidence, ConflictEvent, DataFlow,
    DepartmentAssessment, EvidenceChain, MeetingStage, ProvenanceRow, RadarScores, Supplier,
    TopologyEdge, TopologyNode, TrackingTask, TrendPoint,
};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let catalog = snapshot.catalog;
        let readout = &snapshot.readout;

        let report = JsonReport {
            metadata: JsonMetadata {
                title: config.title_or_default(),
                tool_version: &config.metadata.tool_version,
                generated_at: config.metadata.timestamp(),
                config_path: config.metadata.config_path.as_deref(),
            },
            scenario: config.includes(ReportType::Scenario).then(|| ScenarioSection {
                supplier: snapshot.supplier,
                parameters: snapshot.parameters,
                readout: ReadoutJson {
                    current_price: readout.current_price,
                    deviation_pct: readout.deviation_pct,
                    deviation_display: readout.deviation_display(),
                    deviation_label: readout.deviation.label(),
                    risk_label: readout.risk.label(),
                },
                metrics: readout.metric_cards(snapshot.supplier),
                assessments: catalog.assessments(),
                radar: catalog.radar(),
            }),
            workflow: config.includes(ReportType::Workflow).then(|| WorkflowSection {
                conflicts: catalog.conflicts(),
                arbitrations: catalog.arbitrations(),
                conflict_features: catalog.conflict_features(),
                difference_kinds: catalog.difference_kinds(),
                classification: catalog.classification(),
                provenance: catalog.provenance(),
                evidence: catalog.evidence(),
                confidences: catalog.confidences(),
                timeline: catalog.timeline(),
                topology: TopologyJson {
                    nodes: catalog.nodes(),
                    edges: catalog.edges(),
                },
                flows: catalog.flows(),
                tasks: catalog.tasks(),
            }),
            cases: config.includes(ReportType::Cases).then(|| CasesSection {
                filter: snapshot.case_filter,
                cases: &snapshot.cases,
                trend: snapshot.trend(),
            }),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<ScenarioSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workflow: Option<WorkflowSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cases: Option<CasesSection<'a>>,
}

#[derive(Serialize)]
struct JsonMetadata<'a> {
    title: &'a str,
    tool_version: &'a str,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_path: Option<&'a str>,
}

#[derive(Serialize)]
struct ScenarioSection<'a> {
    supplier: &'a Supplier,
    parameters: Parameters,
    readout: ReadoutJson,
    metrics: [MetricCard; 3],
    assessments: &'a [DepartmentAssessment],
    radar: &'a RadarScores,
}

#[derive(Serialize)]
struct ReadoutJson {
    current_price: f64,
    deviation_pct: f64,
    deviation_display: String,
    deviation_label: &'static str,
    risk_label: &'static str,
}

#[derive(Serialize)]
struct WorkflowSection<'a> {
    conflicts: &'a [ConflictEvent],
    arbitrations: &'a [Arbitration],
    conflict_features: &'a [&'static str],
    difference_kinds: &'a [&'static str],
    classification: &'a [ClassificationRule],
    provenance: &'a [ProvenanceRow],
    evidence: &'a [EvidenceChain],
    confidences: &'a [Confidence],
    timeline: &'a [MeetingStage],
    topology: TopologyJson<'a>,
    flows: &'a [DataFlow],
    tasks: &'a [TrackingTask],
}

#[derive(Serialize)]
struct TopologyJson<'a> {
    nodes: &'a [TopologyNode],
    edges: &'a [TopologyEdge],
}

#[derive(Serialize)]
struct CasesSection<'a> {
    filter: CaseFilter,
    cases: &'a [&'a CaseRecord],
    trend: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DemoCatalog;

    fn render(params: Parameters, types: Vec<ReportType>) -> serde_json::Value {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, params, CaseFilter::All);
        let json = JsonReporter::new()
            .generate_report(&snapshot, &ReportConfig::with_types(types))
            .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_scenario_readout_fields() {
        let value = render(Parameters::new(14.2, 60), vec![ReportType::Scenario]);
        let readout = &value["scenario"]["readout"];
        assert_eq!(readout["deviation_display"], "-88.9%");
        assert_eq!(readout["deviation_label"], "exceeds threshold");
        assert_eq!(readout["risk_label"], "high");
        assert_eq!(value["scenario"]["parameters"]["risk_threshold"], 60);
        assert!(value.get("workflow").is_none());
        assert!(value.get("cases").is_none());
    }

    #[test]
    fn test_workflow_section_shapes() {
        let value = render(Parameters::default(), vec![ReportType::Workflow]);
        let workflow = &value["workflow"];
        assert_eq!(workflow["classification"].as_array().unwrap().len(), 3);
        assert_eq!(workflow["timeline"].as_array().unwrap().len(), 4);
        assert_eq!(workflow["topology"]["edges"].as_array().unwrap().len(), 4);
        assert_eq!(workflow["conflicts"][0]["conflict_type"], "triple");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let catalog = DemoCatalog::seeded();
        let snapshot = DashboardSnapshot::capture(&catalog, Parameters::default(), CaseFilter::All);
        let json = JsonReporter::new()
            .pretty(false)
            .generate_report(&snapshot, &ReportConfig::all())
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
