//! Parameter-to-display mapping.
//!
//! Turns the two user-adjustable controls (baseline price and risk
//! threshold) into the values shown on the scenario screen. Everything
//! here is a pure function of its inputs.

use crate::model::{Department, Supplier};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Baseline price control range, in ten-thousand-yuan units.
pub const BASE_PRICE_RANGE: RangeInclusive<f64> = 10.0..=20.0;
/// Risk threshold control range.
pub const RISK_THRESHOLD_RANGE: RangeInclusive<u8> = 0..=100;

pub const DEFAULT_BASE_PRICE: f64 = 14.2;
pub const DEFAULT_RISK_THRESHOLD: u8 = 60;

/// One slider step.
pub const BASE_PRICE_STEP: f64 = 0.1;
pub const RISK_THRESHOLD_STEP: u8 = 1;

/// Deviations strictly beyond this many percent exceed the threshold.
pub const DEVIATION_LIMIT_PCT: f64 = 5.0;
/// Thresholds strictly below this value are rated high risk.
pub const HIGH_RISK_BELOW: u8 = 70;

/// The two user-controlled inputs, always inside their control ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameters {
    base_price: f64,
    risk_threshold: u8,
}

impl Parameters {
    /// Create parameters, clamping both values into range.
    ///
    /// A non-finite base price falls back to the default.
    #[must_use]
    pub fn new(base_price: f64, risk_threshold: u8) -> Self {
        Self {
            base_price: clamp_base_price(base_price),
            risk_threshold: risk_threshold.min(*RISK_THRESHOLD_RANGE.end()),
        }
    }

    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    #[must_use]
    pub const fn risk_threshold(&self) -> u8 {
        self.risk_threshold
    }

    /// Move the baseline price by `steps` slider steps.
    pub fn nudge_base_price(&mut self, steps: i32) {
        let raw = self.base_price + f64::from(steps) * BASE_PRICE_STEP;
        // Snap to the step grid so repeated nudges don't accumulate error.
        self.base_price = clamp_base_price((raw * 10.0).round() / 10.0);
    }

    /// Move the risk threshold by `steps` slider steps.
    pub fn nudge_risk_threshold(&mut self, steps: i32) {
        let raw = i32::from(self.risk_threshold) + steps * i32::from(RISK_THRESHOLD_STEP);
        let lo = i32::from(*RISK_THRESHOLD_RANGE.start());
        let hi = i32::from(*RISK_THRESHOLD_RANGE.end());
        self.risk_threshold = u8::try_from(raw.clamp(lo, hi)).unwrap_or(DEFAULT_RISK_THRESHOLD);
    }

    /// Position of the baseline price within its range, 0.0-1.0.
    #[must_use]
    pub fn base_price_ratio(&self) -> f64 {
        let (lo, hi) = (*BASE_PRICE_RANGE.start(), *BASE_PRICE_RANGE.end());
        (self.base_price - lo) / (hi - lo)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE, DEFAULT_RISK_THRESHOLD)
    }
}

fn clamp_base_price(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*BASE_PRICE_RANGE.start(), *BASE_PRICE_RANGE.end())
    } else {
        DEFAULT_BASE_PRICE
    }
}

/// Relative deviation of the supplier's price from the baseline, in percent.
///
/// `(supplier_price / 10000 - base_price) / base_price * 100`. A zero
/// baseline yields 0.0 instead of dividing by zero.
#[must_use]
pub fn price_deviation_pct(supplier_price: u32, base_price: f64) -> f64 {
    if base_price == 0.0 {
        return 0.0;
    }
    let current = f64::from(supplier_price) / crate::model::PRICE_SCALE;
    (current - base_price) / base_price * 100.0
}

/// Whether the price deviation stays inside the allowed band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationLabel {
    ExceedsThreshold,
    WithinRange,
}

impl DeviationLabel {
    /// "exceeds threshold" iff `|deviation_pct| > 5`.
    #[must_use]
    pub fn classify(deviation_pct: f64) -> Self {
        if deviation_pct.abs() > DEVIATION_LIMIT_PCT {
            Self::ExceedsThreshold
        } else {
            Self::WithinRange
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExceedsThreshold => "exceeds threshold",
            Self::WithinRange => "within range",
        }
    }

    /// Exceeding deltas are rendered with inverted (warning) colours.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Self::ExceedsThreshold)
    }
}

/// Legal risk rating derived from the risk threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    High,
    Medium,
}

impl RiskLabel {
    /// "high" iff `risk_threshold < 70`, otherwise "medium".
    #[must_use]
    pub const fn classify(risk_threshold: u8) -> Self {
        if risk_threshold < HIGH_RISK_BELOW {
            Self::High
        } else {
            Self::Medium
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// Everything the scenario screen derives from the current parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioReadout {
    /// Supplier quote in yuan
    pub supplier_price: u32,
    /// Supplier quote in ten-thousand-yuan units
    pub current_price: f64,
    pub base_price: f64,
    pub deviation_pct: f64,
    pub deviation: DeviationLabel,
    pub risk_threshold: u8,
    pub risk: RiskLabel,
}

impl ScenarioReadout {
    /// Recompute the readout for one supplier and parameter set.
    #[must_use]
    pub fn compute(supplier: &Supplier, params: &Parameters) -> Self {
        let deviation_pct = price_deviation_pct(supplier.price, params.base_price());
        tracing::debug!(
            supplier = supplier.id,
            base_price = params.base_price(),
            risk_threshold = params.risk_threshold(),
            deviation_pct,
            "recomputed scenario readout"
        );
        Self {
            supplier_price: supplier.price,
            current_price: supplier.current_price(),
            base_price: params.base_price(),
            deviation_pct,
            deviation: DeviationLabel::classify(deviation_pct),
            risk_threshold: params.risk_threshold(),
            risk: RiskLabel::classify(params.risk_threshold()),
        }
    }

    /// Deviation with one decimal place, e.g. `-88.9%`.
    #[must_use]
    pub fn deviation_display(&self) -> String {
        format!("{:.1}%", self.deviation_pct)
    }
}

/// Delta caption on the legal risk card.
pub const LEGAL_RISK_NOTE: &str = "1 related lawsuit";

/// Headline metric for one department column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub department: Department,
    pub title: &'static str,
    pub value: String,
    pub delta: String,
    /// Render the delta in the alert colour instead of the normal one
    pub delta_inverted: bool,
    /// Fill ratio for a progress gauge under the metric, if any
    pub gauge: Option<f64>,
}

impl ScenarioReadout {
    /// The three department metrics, in procurement, legal, finance order.
    #[must_use]
    pub fn metric_cards(&self, supplier: &Supplier) -> [MetricCard; 3] {
        [
            MetricCard {
                department: Department::Procurement,
                title: "Delivery capability score",
                value: format!("{}/100", supplier.delivery_score),
                delta: supplier.recommendation(),
                delta_inverted: false,
                gauge: Some(supplier.delivery_ratio()),
            },
            MetricCard {
                department: Department::Legal,
                title: "Risk rating",
                value: self.risk.label().to_string(),
                delta: LEGAL_RISK_NOTE.to_string(),
                delta_inverted: true,
                gauge: None,
            },
            MetricCard {
                department: Department::Finance,
                title: "Price deviation",
                value: self.deviation_display(),
                delta: self.deviation.label().to_string(),
                delta_inverted: self.deviation.is_inverted(),
                gauge: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(price: u32) -> Supplier {
        Supplier {
            id: "RF-202403",
            name: "Ruifeng Precision",
            category: "Battery tray",
            qualification: "A",
            price,
            delivery_score: 92,
        }
    }

    #[test]
    fn test_deviation_formula_reference_values() {
        let expected = (15_800.0 / 10_000.0 - 14.2) / 14.2 * 100.0;
        let got = price_deviation_pct(15_800, 14.2);
        assert!((got - expected).abs() < 1e-9, "{got} != {expected}");
        assert!((got - -88.873_239_436_6).abs() < 1e-6);
    }

    #[test]
    fn test_deviation_zero_base_guard() {
        assert_eq!(price_deviation_pct(15_800, 0.0), 0.0);
    }

    #[test]
    fn test_deviation_label_boundary() {
        assert_eq!(DeviationLabel::classify(5.0), DeviationLabel::WithinRange);
        assert_eq!(DeviationLabel::classify(-5.0), DeviationLabel::WithinRange);
        assert_eq!(
            DeviationLabel::classify(5.01),
            DeviationLabel::ExceedsThreshold
        );
        assert_eq!(
            DeviationLabel::classify(-88.9),
            DeviationLabel::ExceedsThreshold
        );
        assert!(DeviationLabel::ExceedsThreshold.is_inverted());
        assert!(!DeviationLabel::WithinRange.is_inverted());
    }

    #[test]
    fn test_risk_label_examples() {
        assert_eq!(RiskLabel::classify(60), RiskLabel::High);
        assert_eq!(RiskLabel::classify(69), RiskLabel::High);
        assert_eq!(RiskLabel::classify(70), RiskLabel::Medium);
        assert_eq!(RiskLabel::classify(75), RiskLabel::Medium);
        assert_eq!(RiskLabel::High.label(), "high");
        assert_eq!(RiskLabel::Medium.label(), "medium");
    }

    #[test]
    fn test_parameters_clamp() {
        let p = Parameters::new(3.0, 250);
        assert_eq!(p.base_price(), 10.0);
        assert_eq!(p.risk_threshold(), 100);

        let p = Parameters::new(99.0, 0);
        assert_eq!(p.base_price(), 20.0);

        let p = Parameters::new(f64::NAN, 10);
        assert_eq!(p.base_price(), DEFAULT_BASE_PRICE);
    }

    #[test]
    fn test_parameters_default() {
        let p = Parameters::default();
        assert_eq!(p.base_price(), 14.2);
        assert_eq!(p.risk_threshold(), 60);
    }

    #[test]
    fn test_nudge_stays_on_grid_and_in_range() {
        let mut p = Parameters::default();
        p.nudge_base_price(1);
        assert!((p.base_price() - 14.3).abs() < 1e-9);
        p.nudge_base_price(-3);
        assert!((p.base_price() - 14.0).abs() < 1e-9);
        p.nudge_base_price(1_000);
        assert_eq!(p.base_price(), 20.0);
        p.nudge_base_price(-1_000);
        assert_eq!(p.base_price(), 10.0);

        p.nudge_risk_threshold(15);
        assert_eq!(p.risk_threshold(), 75);
        p.nudge_risk_threshold(-500);
        assert_eq!(p.risk_threshold(), 0);
        p.nudge_risk_threshold(500);
        assert_eq!(p.risk_threshold(), 100);
    }

    #[test]
    fn test_base_price_ratio() {
        assert_eq!(Parameters::new(10.0, 0).base_price_ratio(), 0.0);
        assert_eq!(Parameters::new(20.0, 0).base_price_ratio(), 1.0);
        assert!((Parameters::new(15.0, 0).base_price_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_readout_defaults() {
        let readout = ScenarioReadout::compute(&supplier(15_800), &Parameters::default());
        assert!((readout.current_price - 1.58).abs() < 1e-12);
        assert_eq!(readout.deviation, DeviationLabel::ExceedsThreshold);
        assert_eq!(readout.risk, RiskLabel::High);
        assert_eq!(readout.deviation_display(), "-88.9%");
    }

    #[test]
    fn test_readout_within_range_for_matching_price() {
        // A 150000-yuan quote against a 15.0 baseline is a 0% deviation.
        let readout = ScenarioReadout::compute(&supplier(150_000), &Parameters::new(15.0, 80));
        assert!(readout.deviation_pct.abs() < 1e-12);
        assert_eq!(readout.deviation, DeviationLabel::WithinRange);
        assert_eq!(readout.risk, RiskLabel::Medium);
        assert_eq!(readout.deviation_display(), "0.0%");
    }

    #[test]
    fn test_metric_cards_follow_readout() {
        let params = Parameters::new(14.2, 60);
        let supplier = supplier(15_800);
        let readout = ScenarioReadout::compute(&supplier, &params);
        let [procurement, legal, finance] = readout.metric_cards(&supplier);

        assert_eq!(procurement.value, "92/100");
        assert_eq!(procurement.delta, "Recommended grade A");
        assert_eq!(procurement.gauge, Some(0.92));
        assert_eq!(legal.value, "high");
        assert!(legal.delta_inverted);
        assert_eq!(finance.value, "-88.9%");
        assert_eq!(finance.delta, "exceeds threshold");
        assert!(finance.delta_inverted);
    }
}
