//! Conflict events and their arbitration outcomes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How many departmental AI assessments disagree on a supplier decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    Single,
    Double,
    Triple,
}

impl ConflictType {
    /// All conflict types, most severe first (selector order).
    pub const ALL: [Self; 3] = [Self::Triple, Self::Double, Self::Single];

    /// Short machine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single conflict",
            Self::Double => "Double conflict",
            Self::Triple => "Triple conflict",
        }
    }

    /// Number of departments whose assessments disagree.
    #[must_use]
    pub const fn disagreeing_departments(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single conflict" => Ok(Self::Single),
            "double" | "double conflict" => Ok(Self::Double),
            "triple" | "triple conflict" => Ok(Self::Triple),
            other => Err(format!(
                "unknown conflict type '{other}' (expected single, double or triple)"
            )),
        }
    }
}

/// Resolution state of a conflict event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Open,
    Resolved,
}

impl ResolutionStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Resolved => "Resolved",
        }
    }
}

/// A detected disagreement between departmental AIs about one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEvent {
    pub event_id: &'static str,
    pub supplier_id: &'static str,
    pub conflict_type: ConflictType,
    pub status: ResolutionStatus,
}

/// The fixed outcome attached to a conflict event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arbitration {
    pub event_id: &'static str,
    pub resolution: &'static str,
    pub conditions: Vec<&'static str>,
}
