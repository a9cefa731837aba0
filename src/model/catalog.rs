//! The literal demo dataset.
//!
//! [`DemoCatalog::seeded`] builds every table once at startup. Fields are
//! private so the dataset stays constant for the whole session.

use super::case::{filter_cases, CaseFilter, CaseRecord};
use super::conflict::{Arbitration, ConflictEvent, ConflictType, ResolutionStatus};
use super::supplier::Supplier;
use super::workflow::{
    ClassificationRule, Confidence, DataFlow, Department, DepartmentAssessment, EvidenceChain,
    EvidenceItem, FlowStatus, MeetingStage, NodeKind, ProvenanceRow, RadarScores, StageStatus,
    TopologyEdge, TopologyNode, TrackingTask, VerificationStatus, WeightedFactor,
};
use indexmap::IndexMap;
use serde::Serialize;

/// Immutable demo dataset shared by every screen.
#[derive(Debug, Clone, Serialize)]
pub struct DemoCatalog {
    suppliers: Vec<Supplier>,
    conflicts: Vec<ConflictEvent>,
    arbitrations: Vec<Arbitration>,
    cases: Vec<CaseRecord>,
    assessments: Vec<DepartmentAssessment>,
    radar: RadarScores,
    conflict_features: Vec<&'static str>,
    difference_kinds: Vec<&'static str>,
    classification: Vec<ClassificationRule>,
    provenance: Vec<ProvenanceRow>,
    evidence: Vec<EvidenceChain>,
    confidences: Vec<Confidence>,
    timeline: Vec<MeetingStage>,
    nodes: Vec<TopologyNode>,
    edges: Vec<TopologyEdge>,
    flows: Vec<DataFlow>,
    tasks: Vec<TrackingTask>,
}

impl DemoCatalog {
    /// Build the demo dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            suppliers: vec![Supplier {
                id: "RF-202403",
                name: "Ruifeng Precision",
                category: "Battery tray",
                qualification: "A",
                price: 15_800,
                delivery_score: 92,
            }],
            conflicts: vec![ConflictEvent {
                event_id: "C-001",
                supplier_id: "RF-202403",
                conflict_type: ConflictType::Triple,
                status: ResolutionStatus::Resolved,
            }],
            arbitrations: vec![Arbitration {
                event_id: "C-001",
                resolution: "Conditional approval",
                conditions: vec![
                    "3-month probation",
                    "30% down payment",
                    "Supplementary due diligence",
                ],
            }],
            cases: vec![
                CaseRecord {
                    case_id: "C-2023-045",
                    conflict_type: ConflictType::Triple,
                    disposition: "Conditional approval",
                    duration_hours: 24,
                    retention: "Successful partnership",
                },
                CaseRecord {
                    case_id: "C-2024-012",
                    conflict_type: ConflictType::Double,
                    disposition: "Approved after adjustment",
                    duration_hours: 8,
                    retention: "In progress",
                },
                CaseRecord {
                    case_id: "C-2024-018",
                    conflict_type: ConflictType::Single,
                    disposition: "Automatic handling",
                    duration_hours: 2,
                    retention: "Terminated",
                },
            ],
            assessments: seeded_assessments(),
            radar: seeded_radar(),
            conflict_features: vec![
                "Procurement AI confidence: 92% (high-confidence recommendation)",
                "Legal AI confidence: 78% (medium risk)",
                "Finance AI confidence: 85% (high-certainty overrun)",
            ],
            difference_kinds: vec![
                "Objective conflict: efficiency vs compliance vs cost",
                "Data source gap: operational vs legal vs financial data",
                "Model gap: supervised learning vs graph computing vs time series",
            ],
            classification: vec![
                ClassificationRule {
                    conflict_type: ConflictType::Single,
                    description: "Single indicator out of bounds",
                    channel: "Automatic compensation negotiation",
                    time_limit_hours: 2,
                },
                ClassificationRule {
                    conflict_type: ConflictType::Double,
                    description: "Two objectives in conflict",
                    channel: "Joint departmental pre-review",
                    time_limit_hours: 8,
                },
                ClassificationRule {
                    conflict_type: ConflictType::Triple,
                    description: "Triple conflict + confidence gap",
                    channel: "AI arbitration committee",
                    time_limit_hours: 24,
                },
            ],
            provenance: vec![
                ProvenanceRow {
                    department: Department::Procurement,
                    indicator: "On-time delivery rate",
                    value: "98%",
                    source: "ERP order data",
                    status: VerificationStatus::Verified,
                },
                ProvenanceRow {
                    department: Department::Legal,
                    indicator: "Related litigation",
                    value: "1 case",
                    source: "Court judgement database",
                    status: VerificationStatus::Confirmed,
                },
                ProvenanceRow {
                    department: Department::Finance,
                    indicator: "Price deviation",
                    value: "+12%",
                    source: "Purchase history",
                    status: VerificationStatus::NeedsReview,
                },
            ],
            evidence: seeded_evidence(),
            confidences: vec![
                Confidence {
                    department: Department::Procurement,
                    percent: 92,
                    note: Some("High-credibility band"),
                    inverted: false,
                },
                Confidence {
                    department: Department::Legal,
                    percent: 78,
                    note: None,
                    inverted: true,
                },
                Confidence {
                    department: Department::Finance,
                    percent: 85,
                    note: Some("High-credibility band"),
                    inverted: false,
                },
            ],
            timeline: vec![
                MeetingStage {
                    stage: "Preparation",
                    status: StageStatus::Done,
                    duration_hours: 2,
                    owner: "System (automatic)",
                },
                MeetingStage {
                    stage: "Evidence retrieval",
                    status: StageStatus::InProgress,
                    duration_hours: 1,
                    owner: "Internal audit",
                },
                MeetingStage {
                    stage: "Multi-party hearing",
                    status: StageStatus::Pending,
                    duration_hours: 3,
                    owner: "Arbitration chair",
                },
                MeetingStage {
                    stage: "Resolution drafting",
                    status: StageStatus::Pending,
                    duration_hours: 1,
                    owner: "AI advisor",
                },
            ],
            nodes: vec![
                TopologyNode {
                    name: "Chain Audit core",
                    kind: NodeKind::Hub,
                    x: 2.0,
                    y: 2.0,
                    size: 30,
                },
                TopologyNode {
                    name: "ERP",
                    kind: NodeKind::Business,
                    x: 1.0,
                    y: 1.0,
                    size: 20,
                },
                TopologyNode {
                    name: "Contract DB",
                    kind: NodeKind::Legal,
                    x: 3.0,
                    y: 1.0,
                    size: 20,
                },
                TopologyNode {
                    name: "Finance platform",
                    kind: NodeKind::Finance,
                    x: 2.0,
                    y: 0.0,
                    size: 20,
                },
                TopologyNode {
                    name: "Sentiment monitor",
                    kind: NodeKind::External,
                    x: 4.0,
                    y: 2.0,
                    size: 20,
                },
            ],
            edges: vec![
                TopologyEdge {
                    from: "Chain Audit core",
                    to: "ERP",
                    link: "Real-time data",
                },
                TopologyEdge {
                    from: "Chain Audit core",
                    to: "Contract DB",
                    link: "API call",
                },
                TopologyEdge {
                    from: "Chain Audit core",
                    to: "Finance platform",
                    link: "Bidirectional sync",
                },
                TopologyEdge {
                    from: "Chain Audit core",
                    to: "Sentiment monitor",
                    link: "Data scraping",
                },
            ],
            flows: vec![
                DataFlow {
                    channel: "ERP -> core",
                    data_type: "Purchase orders",
                    status: FlowStatus::Normal,
                    latency_ms: 5,
                },
                DataFlow {
                    channel: "Legal -> core",
                    data_type: "Contract clauses",
                    status: FlowStatus::Delayed,
                    latency_ms: 320,
                },
                DataFlow {
                    channel: "Finance -> core",
                    data_type: "Cost data",
                    status: FlowStatus::Normal,
                    latency_ms: 8,
                },
                DataFlow {
                    channel: "Sentiment -> core",
                    data_type: "Industry risk",
                    status: FlowStatus::Normal,
                    latency_ms: 120,
                },
            ],
            tasks: vec![
                TrackingTask {
                    task: "Contract revision",
                    executor: "Legal dept.",
                    supervisor: "Internal audit",
                    criterion: "Risk < 30",
                },
                TrackingTask {
                    task: "Payment adjustment",
                    executor: "Finance dept.",
                    supervisor: "Supply chain dept.",
                    criterion: "Deviation < 5%",
                },
                TrackingTask {
                    task: "Relationship upkeep",
                    executor: "Procurement dept.",
                    supervisor: "Customer success",
                    criterion: "Rating >= 4",
                },
            ],
        }
    }

    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// The supplier featured on the scenario screen.
    ///
    /// The seeded catalog always holds at least one supplier.
    #[must_use]
    pub fn featured_supplier(&self) -> &Supplier {
        &self.suppliers[0]
    }

    #[must_use]
    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn conflicts(&self) -> &[ConflictEvent] {
        &self.conflicts
    }

    #[must_use]
    pub fn conflicts_for_supplier(&self, supplier_id: &str) -> Vec<&ConflictEvent> {
        self.conflicts
            .iter()
            .filter(|c| c.supplier_id == supplier_id)
            .collect()
    }

    #[must_use]
    pub fn arbitrations(&self) -> &[Arbitration] {
        &self.arbitrations
    }

    #[must_use]
    pub fn arbitration_for_event(&self, event_id: &str) -> Option<&Arbitration> {
        self.arbitrations.iter().find(|a| a.event_id == event_id)
    }

    #[must_use]
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Case rows passing the selector, in literal order.
    #[must_use]
    pub fn filtered_cases(&self, filter: CaseFilter) -> Vec<&CaseRecord> {
        filter_cases(&self.cases, filter)
    }

    #[must_use]
    pub fn assessments(&self) -> &[DepartmentAssessment] {
        &self.assessments
    }

    #[must_use]
    pub fn assessment(&self, department: Department) -> Option<&DepartmentAssessment> {
        self.assessments.iter().find(|a| a.department == department)
    }

    #[must_use]
    pub const fn radar(&self) -> &RadarScores {
        &self.radar
    }

    #[must_use]
    pub fn conflict_features(&self) -> &[&'static str] {
        &self.conflict_features
    }

    #[must_use]
    pub fn difference_kinds(&self) -> &[&'static str] {
        &self.difference_kinds
    }

    #[must_use]
    pub fn classification(&self) -> &[ClassificationRule] {
        &self.classification
    }

    #[must_use]
    pub fn provenance(&self) -> &[ProvenanceRow] {
        &self.provenance
    }

    #[must_use]
    pub fn evidence(&self) -> &[EvidenceChain] {
        &self.evidence
    }

    #[must_use]
    pub fn confidences(&self) -> &[Confidence] {
        &self.confidences
    }

    #[must_use]
    pub fn timeline(&self) -> &[MeetingStage] {
        &self.timeline
    }

    #[must_use]
    pub fn nodes(&self) -> &[TopologyNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, name: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    #[must_use]
    pub fn edges(&self) -> &[TopologyEdge] {
        &self.edges
    }

    /// Edges with both endpoints resolved to nodes; dangling edges are skipped.
    #[must_use]
    pub fn resolved_edges(&self) -> Vec<(&TopologyNode, &TopologyNode, &TopologyEdge)> {
        self.edges
            .iter()
            .filter_map(|e| Some((self.node(e.from)?, self.node(e.to)?, e)))
            .collect()
    }

    #[must_use]
    pub fn flows(&self) -> &[DataFlow] {
        &self.flows
    }

    #[must_use]
    pub fn tasks(&self) -> &[TrackingTask] {
        &self.tasks
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn factor(name: &'static str, weight_pct: u8) -> WeightedFactor {
    WeightedFactor { name, weight_pct }
}

fn seeded_assessments() -> Vec<DepartmentAssessment> {
    vec![
        DepartmentAssessment {
            department: Department::Procurement,
            metric: "Delivery capability",
            model_type: "Random forest",
            factor_heading: "Input features",
            factors: vec![
                factor("Historical on-time delivery", 30),
                factor("Certificate completeness", 25),
                factor("Capacity stability", 25),
                factor("Years of cooperation", 20),
            ],
            data_sources: "ERP system + supplier self-declaration forms",
        },
        DepartmentAssessment {
            department: Department::Legal,
            metric: "Risk rating",
            model_type: "Graph neural network",
            factor_heading: "Analysis dimensions",
            factors: vec![
                factor("Direct legal risk", 40),
                factor("Related-party risk", 30),
                factor("Industry compliance trend", 20),
                factor("Public sentiment risk", 10),
            ],
            data_sources: "Court judgement database + enterprise relationship graph",
        },
        DepartmentAssessment {
            department: Department::Finance,
            metric: "Price deviation",
            model_type: "LSTM time-series forecast",
            factor_heading: "Considered factors",
            factors: vec![
                factor("Historical purchase prices", 50),
                factor("Raw material price index", 30),
                factor("Exchange rate movement", 15),
                factor("Transport cost", 5),
            ],
            data_sources: "Finance system + commodity exchange platform",
        },
    ]
}

fn seeded_radar() -> RadarScores {
    let mut series = IndexMap::new();
    series.insert(Department::Procurement, vec![92, 60, 85, 70, 65]);
    series.insert(Department::Legal, vec![75, 35, 60, 30, 55]);
    series.insert(Department::Finance, vec![80, 70, 68, 75, 60]);
    RadarScores {
        dimensions: vec![
            "Delivery",
            "Risk control",
            "Cost efficiency",
            "Compliance",
            "Sustainability",
        ],
        series,
    }
}

fn item(supports: bool, text: &'static str) -> EvidenceItem {
    EvidenceItem { supports, text }
}

fn seeded_evidence() -> Vec<EvidenceChain> {
    vec![
        EvidenceChain {
            department: Department::Procurement,
            title: "Procurement AI evidence chain",
            items: vec![
                item(true, "10 on-time delivery records"),
                item(true, "3 quality certifications"),
                item(true, "Capacity utilisation 85%"),
            ],
        },
        EvidenceChain {
            department: Department::Legal,
            title: "Legal AI risk chain",
            items: vec![
                item(false, "Pending litigation at an affiliated company"),
                item(false, "Contract template version outdated"),
                item(true, "No administrative penalties on record"),
            ],
        },
        EvidenceChain {
            department: Department::Finance,
            title: "Finance AI cost chain",
            items: vec![
                item(true, "Quote above industry benchmark"),
                item(true, "Payment terms at medium risk"),
                item(true, "Exchange rate risk under control"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_shapes() {
        let catalog = DemoCatalog::seeded();
        assert_eq!(catalog.suppliers().len(), 1);
        assert_eq!(catalog.cases().len(), 3);
        assert_eq!(catalog.assessments().len(), 3);
        assert_eq!(catalog.radar().dimensions.len(), 5);
        assert!(catalog
            .radar()
            .series
            .values()
            .all(|scores| scores.len() == catalog.radar().dimensions.len()));
        assert_eq!(catalog.nodes().len(), 5);
        assert_eq!(catalog.edges().len(), 4);
    }

    #[test]
    fn test_featured_supplier() {
        let catalog = DemoCatalog::seeded();
        let supplier = catalog.featured_supplier();
        assert_eq!(supplier.id, "RF-202403");
        assert_eq!(supplier.price, 15_800);
        assert_eq!(supplier.delivery_score, 92);
    }

    #[test]
    fn test_identifier_lookups() {
        let catalog = DemoCatalog::seeded();
        let conflicts = catalog.conflicts_for_supplier("RF-202403");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict_type, ConflictType::Triple);

        let arbitration = catalog
            .arbitration_for_event(conflicts[0].event_id)
            .expect("seeded arbitration");
        assert_eq!(arbitration.conditions.len(), 3);
        assert!(catalog.arbitration_for_event("C-999").is_none());
        assert!(catalog.supplier("nope").is_none());
    }

    #[test]
    fn test_factor_weights_total_100() {
        let catalog = DemoCatalog::seeded();
        for assessment in catalog.assessments() {
            assert_eq!(assessment.total_weight(), 100, "{:?}", assessment.department);
        }
    }

    #[test]
    fn test_all_edges_resolve() {
        let catalog = DemoCatalog::seeded();
        assert_eq!(catalog.resolved_edges().len(), catalog.edges().len());
    }

    #[test]
    fn test_classification_covers_every_type() {
        let catalog = DemoCatalog::seeded();
        for kind in ConflictType::ALL {
            assert!(catalog
                .classification()
                .iter()
                .any(|r| r.conflict_type == kind));
        }
    }
}
