//! Display tables for the departmental AIs and the arbitration workflow.
//!
//! Everything here is literal demo content. Status enums carry a [`Tone`]
//! so renderers can colour cells without re-deriving meaning from text.

use super::conflict::ConflictType;
use indexmap::IndexMap;
use serde::Serialize;

/// Semantic colour of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Caution,
    Alert,
    Neutral,
}

/// A department that runs its own assessment AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Procurement,
    Legal,
    Finance,
}

impl Department {
    pub const ALL: [Self; 3] = [Self::Procurement, Self::Legal, Self::Finance];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Procurement => "Procurement",
            Self::Legal => "Legal",
            Self::Finance => "Finance",
        }
    }

    /// Name of the department's assessment model.
    #[must_use]
    pub const fn ai_name(self) -> &'static str {
        match self {
            Self::Procurement => "Procurement AI",
            Self::Legal => "Legal AI",
            Self::Finance => "Finance AI",
        }
    }
}

/// An input feature and its weight in a department model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedFactor {
    pub name: &'static str,
    pub weight_pct: u8,
}

/// Static description of one departmental AI: the expandable
/// "decision logic" panel of the scenario screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAssessment {
    pub department: Department,
    /// Caption of the headline metric
    pub metric: &'static str,
    pub model_type: &'static str,
    /// Heading of the factor list ("Input features", "Analysis dimensions", ...)
    pub factor_heading: &'static str,
    pub factors: Vec<WeightedFactor>,
    pub data_sources: &'static str,
}

impl DepartmentAssessment {
    /// Sum of factor weights; the literal tables always total 100.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.factors.iter().map(|f| u32::from(f.weight_pct)).sum()
    }
}

/// Cross-AI comparison scores over shared evaluation dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarScores {
    pub dimensions: Vec<&'static str>,
    pub series: IndexMap<Department, Vec<u8>>,
}

impl RadarScores {
    /// Score of one department on one dimension.
    #[must_use]
    pub fn score(&self, department: Department, dimension: usize) -> Option<u8> {
        self.series.get(&department)?.get(dimension).copied()
    }

    /// Mean score per department, in series order.
    #[must_use]
    pub fn averages(&self) -> Vec<(Department, f64)> {
        self.series
            .iter()
            .map(|(dept, scores)| {
                let total: u32 = scores.iter().map(|s| u32::from(*s)).sum();
                let avg = if scores.is_empty() {
                    0.0
                } else {
                    f64::from(total) / scores.len() as f64
                };
                (*dept, avg)
            })
            .collect()
    }
}

/// Row of the conflict classification matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRule {
    pub conflict_type: ConflictType,
    pub description: &'static str,
    pub channel: &'static str,
    pub time_limit_hours: u32,
}

/// Verification state of an AI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Confirmed,
    NeedsReview,
}

impl VerificationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Confirmed => "Confirmed",
            Self::NeedsReview => "Needs review",
        }
    }

    /// Green for verified, orange for confirmed, red otherwise.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Verified => Tone::Good,
            Self::Confirmed => Tone::Caution,
            Self::NeedsReview => Tone::Alert,
        }
    }
}

/// Provenance check of one key AI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceRow {
    pub department: Department,
    pub indicator: &'static str,
    pub value: &'static str,
    pub source: &'static str,
    pub status: VerificationStatus,
}

/// Progress of an arbitration meeting stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Done,
    InProgress,
    Pending,
}

impl StageStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In progress",
            Self::Pending => "Pending",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Done => Tone::Good,
            Self::InProgress => Tone::Caution,
            Self::Pending => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingStage {
    pub stage: &'static str,
    pub status: StageStatus,
    pub duration_hours: u32,
    pub owner: &'static str,
}

/// One line of an evidence chain; `supports` is false for findings
/// that count against the supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceItem {
    pub supports: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceChain {
    pub department: Department,
    pub title: &'static str,
    pub items: Vec<EvidenceItem>,
}

impl EvidenceChain {
    #[must_use]
    pub fn against_count(&self) -> usize {
        self.items.iter().filter(|i| !i.supports).count()
    }
}

/// Self-reported confidence of a departmental AI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confidence {
    pub department: Department,
    pub percent: u8,
    /// Short qualifier shown under the metric, if any
    pub note: Option<&'static str>,
    /// Rendered with inverted delta colour
    pub inverted: bool,
}

/// Kind of system in the integration topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Hub,
    Business,
    Legal,
    Finance,
    External,
}

impl NodeKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hub => "Hub system",
            Self::Business => "Business system",
            Self::Legal => "Legal system",
            Self::Finance => "Finance system",
            Self::External => "External data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyNode {
    pub name: &'static str,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    /// Relative marker size
    pub size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub link: &'static str,
}

/// State of a real-time data channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Normal,
    Delayed,
}

impl FlowStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Delayed => "Delayed",
        }
    }

    /// Only delayed channels are highlighted.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Normal => Tone::Neutral,
            Self::Delayed => Tone::Alert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFlow {
    pub channel: &'static str,
    pub data_type: &'static str,
    pub status: FlowStatus,
    pub latency_ms: u32,
}

/// Follow-up task from the arbitration resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingTask {
    pub task: &'static str,
    pub executor: &'static str,
    pub supervisor: &'static str,
    pub criterion: &'static str,
}

impl TrackingTask {
    /// Executor cells owned by the legal department are highlighted.
    #[must_use]
    pub fn highlight_executor(&self) -> bool {
        self.executor == "Legal dept."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_score_lookup() {
        let mut series = IndexMap::new();
        series.insert(Department::Legal, vec![10, 20]);
        let radar = RadarScores {
            dimensions: vec!["a", "b"],
            series,
        };
        assert_eq!(radar.score(Department::Legal, 1), Some(20));
        assert_eq!(radar.score(Department::Legal, 2), None);
        assert_eq!(radar.score(Department::Finance, 0), None);
        assert_eq!(radar.averages(), vec![(Department::Legal, 15.0)]);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(VerificationStatus::Verified.tone(), Tone::Good);
        assert_eq!(VerificationStatus::Confirmed.tone(), Tone::Caution);
        assert_eq!(VerificationStatus::NeedsReview.tone(), Tone::Alert);
        assert_eq!(FlowStatus::Delayed.tone(), Tone::Alert);
        assert_eq!(FlowStatus::Normal.tone(), Tone::Neutral);
    }

    #[test]
    fn test_evidence_against_count() {
        let chain = EvidenceChain {
            department: Department::Legal,
            title: "t",
            items: vec![
                EvidenceItem {
                    supports: false,
                    text: "a",
                },
                EvidenceItem {
                    supports: true,
                    text: "b",
                },
            ],
        };
        assert_eq!(chain.against_count(), 1);
    }
}
