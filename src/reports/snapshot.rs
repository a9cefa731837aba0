//! Point-in-time view of the dashboard shared by every report format.

use crate::mapper::{Parameters, ScenarioReadout};
use crate::model::{duration_trend, CaseFilter, CaseRecord, DemoCatalog, Supplier, TrendPoint};

/// The catalog plus everything derived from the current controls.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot<'a> {
    pub catalog: &'a DemoCatalog,
    pub supplier: &'a Supplier,
    pub parameters: Parameters,
    pub readout: ScenarioReadout,
    pub case_filter: CaseFilter,
    pub cases: Vec<&'a CaseRecord>,
}

impl<'a> DashboardSnapshot<'a> {
    /// Compute the readout and case selection for the featured supplier.
    #[must_use]
    pub fn capture(catalog: &'a DemoCatalog, parameters: Parameters, case_filter: CaseFilter) -> Self {
        let supplier = catalog.featured_supplier();
        Self {
            catalog,
            supplier,
            parameters,
            readout: ScenarioReadout::compute(supplier, &parameters),
            case_filter,
            cases: catalog.filtered_cases(case_filter),
        }
    }

    /// Processing duration per filtered case.
    #[must_use]
    pub fn trend(&self) -> Vec<TrendPoint> {
        duration_trend(&self.cases)
    }
}
