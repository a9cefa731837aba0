//! Demo data model.
//!
//! All records are constant literals built once by [`DemoCatalog::seeded`].
//! Relationships between records are informal identifier matches used
//! for display only.

mod case;
mod catalog;
mod conflict;
mod supplier;
mod workflow;

pub use case::{duration_trend, filter_cases, CaseFilter, CaseRecord, TrendPoint};
pub use catalog::DemoCatalog;
pub use conflict::{Arbitration, ConflictEvent, ConflictType, ResolutionStatus};
pub use supplier::{Supplier, PRICE_SCALE};
pub use workflow::{
    ClassificationRule, Confidence, DataFlow, Department, DepartmentAssessment, EvidenceChain,
    EvidenceItem, FlowStatus, MeetingStage, NodeKind, ProvenanceRow, RadarScores, StageStatus,
    Tone, TopologyEdge, TopologyNode, TrackingTask, VerificationStatus, WeightedFactor,
};
