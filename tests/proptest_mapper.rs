//! Property-based tests for the parameter-to-display mapping and the
//! case filter.

use chainaudit::mapper::{
    price_deviation_pct, DeviationLabel, Parameters, RiskLabel, ScenarioReadout, BASE_PRICE_RANGE,
    HIGH_RISK_BELOW,
};
use chainaudit::model::{filter_cases, CaseFilter, ConflictType, DemoCatalog};
use proptest::prelude::*;

fn conflict_type() -> impl Strategy<Value = ConflictType> {
    prop_oneof![
        Just(ConflictType::Single),
        Just(ConflictType::Double),
        Just(ConflictType::Triple),
    ]
}

proptest! {
    // Pure arithmetic, so a wide sweep is cheap
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn deviation_matches_formula(base in 10.0f64..=20.0, price in 1u32..100_000) {
        let expected = (f64::from(price) / 10_000.0 - base) / base * 100.0;
        prop_assert!((price_deviation_pct(price, base) - expected).abs() < 1e-9);
    }

    #[test]
    fn deviation_label_iff_beyond_five(base in 10.0f64..=20.0, price in 1u32..400_000) {
        let pct = price_deviation_pct(price, base);
        let label = DeviationLabel::classify(pct);
        prop_assert_eq!(label == DeviationLabel::ExceedsThreshold, pct.abs() > 5.0);
    }

    #[test]
    fn risk_label_iff_below_seventy(threshold in 0u8..=100) {
        let label = RiskLabel::classify(threshold);
        prop_assert_eq!(label == RiskLabel::High, threshold < HIGH_RISK_BELOW);
        prop_assert_eq!(label == RiskLabel::Medium, threshold >= 70);
    }

    #[test]
    fn parameters_always_in_range(base in -1.0e6f64..1.0e6, threshold in any::<u8>()) {
        let params = Parameters::new(base, threshold);
        prop_assert!(BASE_PRICE_RANGE.contains(&params.base_price()));
        prop_assert!(params.risk_threshold() <= 100);
    }

    #[test]
    fn nudging_never_leaves_range(steps in prop::collection::vec(-50i32..=50, 0..40)) {
        let mut params = Parameters::default();
        for step in steps {
            params.nudge_base_price(step);
            params.nudge_risk_threshold(step);
            prop_assert!(BASE_PRICE_RANGE.contains(&params.base_price()));
            prop_assert!(params.risk_threshold() <= 100);
        }
    }

    #[test]
    fn readout_is_pure(base in 10.0f64..=20.0, threshold in 0u8..=100) {
        let catalog = DemoCatalog::seeded();
        let params = Parameters::new(base, threshold);
        let first = ScenarioReadout::compute(catalog.featured_supplier(), &params);
        let second = ScenarioReadout::compute(catalog.featured_supplier(), &params);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn type_filter_keeps_only_that_type(kind in conflict_type()) {
        let catalog = DemoCatalog::seeded();
        let rows = filter_cases(catalog.cases(), CaseFilter::Only(kind));
        prop_assert!(rows.iter().all(|c| c.conflict_type == kind));
        let expected = catalog.cases().iter().filter(|c| c.conflict_type == kind).count();
        prop_assert_eq!(rows.len(), expected);
    }

    #[test]
    fn filter_parse_accepts_any_case(kind in conflict_type(), upper in any::<bool>()) {
        let text = if upper { kind.as_str().to_uppercase() } else { kind.as_str().to_string() };
        let parsed: Result<CaseFilter, _> = text.parse();
        prop_assert_eq!(parsed, Ok(CaseFilter::Only(kind)));
    }
}

#[test]
fn all_filter_returns_literal_set_unchanged() {
    let catalog = DemoCatalog::seeded();
    let rows = filter_cases(catalog.cases(), CaseFilter::All);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().zip(catalog.cases()).all(|(a, b)| *a == b));
}
