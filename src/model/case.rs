//! Case library records and the conflict-type filter.

use super::conflict::ConflictType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A completed arbitration case in the implementation library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub case_id: &'static str,
    pub conflict_type: ConflictType,
    pub disposition: &'static str,
    /// Processing time in hours
    pub duration_hours: u32,
    /// How the supplier relationship ended up
    pub retention: &'static str,
}

/// Case-type selector value: everything, or one conflict type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseFilter {
    #[default]
    All,
    Only(ConflictType),
}

impl CaseFilter {
    /// Selector options in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(ConflictType::Triple),
        Self::Only(ConflictType::Double),
        Self::Only(ConflictType::Single),
    ];

    /// Exact-match predicate on the conflict-type column.
    #[must_use]
    pub fn matches(self, case: &CaseRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => case.conflict_type == kind,
        }
    }

    /// The next selector option, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }

    /// The previous selector option, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(kind) => kind.label(),
        }
    }
}

impl fmt::Display for CaseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => write!(f, "{kind}"),
        }
    }
}

impl FromStr for CaseFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<ConflictType>()
            .map(Self::Only)
            .map_err(|_| format!("invalid case filter '{s}' (expected all, triple, double or single)"))
    }
}

impl Serialize for CaseFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Apply the case-type filter, keeping literal order.
///
/// `CaseFilter::All` returns every row unchanged.
#[must_use]
pub fn filter_cases(cases: &[CaseRecord], filter: CaseFilter) -> Vec<&CaseRecord> {
    cases.iter().filter(|c| filter.matches(c)).collect()
}

/// One point of the case-efficiency trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub case_id: &'static str,
    pub duration_hours: u32,
}

/// Processing duration per case, in table order.
#[must_use]
pub fn duration_trend(cases: &[&CaseRecord]) -> Vec<TrendPoint> {
    cases
        .iter()
        .map(|c| TrendPoint {
            case_id: c.case_id,
            duration_hours: c.duration_hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases() -> Vec<CaseRecord> {
        vec![
            CaseRecord {
                case_id: "A",
                conflict_type: ConflictType::Triple,
                disposition: "x",
                duration_hours: 24,
                retention: "y",
            },
            CaseRecord {
                case_id: "B",
                conflict_type: ConflictType::Single,
                disposition: "x",
                duration_hours: 2,
                retention: "y",
            },
        ]
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let cases = cases();
        let filtered = filter_cases(&cases, CaseFilter::All);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].case_id, "A");
    }

    #[test]
    fn test_filter_by_type() {
        let cases = cases();
        let filtered = filter_cases(&cases, CaseFilter::Only(ConflictType::Single));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].case_id, "B");

        let none = filter_cases(&cases, CaseFilter::Only(ConflictType::Double));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = CaseFilter::All;
        for _ in 0..CaseFilter::OPTIONS.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CaseFilter::All);
        assert_eq!(CaseFilter::All.prev(), CaseFilter::Only(ConflictType::Single));
        assert_eq!(CaseFilter::All.next(), CaseFilter::Only(ConflictType::Triple));
    }

    #[test]
    fn test_filter_parse_and_display() {
        assert_eq!("ALL".parse::<CaseFilter>(), Ok(CaseFilter::All));
        assert_eq!(
            "double".parse::<CaseFilter>(),
            Ok(CaseFilter::Only(ConflictType::Double))
        );
        assert!("none".parse::<CaseFilter>().is_err());
        assert_eq!(CaseFilter::Only(ConflictType::Triple).to_string(), "triple");
    }

    #[test]
    fn test_duration_trend_follows_rows() {
        let cases = cases();
        let rows = filter_cases(&cases, CaseFilter::All);
        let trend = duration_trend(&rows);
        assert_eq!(
            trend.iter().map(|p| p.duration_hours).collect::<Vec<_>>(),
            vec![24, 2]
        );
    }
}
