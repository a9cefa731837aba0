//! Supplier records.

use serde::Serialize;

/// Quoted supplier prices are in yuan; the dashboard compares them in
/// units of ten thousand yuan.
pub const PRICE_SCALE: f64 = 10_000.0;

/// A qualified supplier under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Qualification grade ("A", "B", ...)
    pub qualification: &'static str,
    /// Quoted price in yuan
    pub price: u32,
    /// Delivery capability score, 0-100
    pub delivery_score: u8,
}

impl Supplier {
    /// Quoted price in ten-thousand-yuan units.
    #[must_use]
    pub fn current_price(&self) -> f64 {
        f64::from(self.price) / PRICE_SCALE
    }

    /// Delivery score as a 0.0-1.0 ratio for progress gauges.
    #[must_use]
    pub fn delivery_ratio(&self) -> f64 {
        f64::from(self.delivery_score.min(100)) / 100.0
    }

    /// Qualification grade rendered the way the procurement metric shows it.
    #[must_use]
    pub fn recommendation(&self) -> String {
        format!("Recommended grade {}", self.qualification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(price: u32, delivery_score: u8) -> Supplier {
        Supplier {
            id: "T-1",
            name: "Test",
            category: "Parts",
            qualification: "A",
            price,
            delivery_score,
        }
    }

    #[test]
    fn test_current_price_scaling() {
        assert!((supplier(15_800, 92).current_price() - 1.58).abs() < 1e-12);
        assert_eq!(supplier(0, 92).current_price(), 0.0);
    }

    #[test]
    fn test_delivery_ratio_is_capped() {
        assert!((supplier(1, 92).delivery_ratio() - 0.92).abs() < 1e-12);
        assert_eq!(supplier(1, 250).delivery_ratio(), 1.0);
    }

    #[test]
    fn test_recommendation_label() {
        assert_eq!(supplier(1, 1).recommendation(), "Recommended grade A");
    }
}
