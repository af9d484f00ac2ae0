//! Derivation of the three core performance metrics from raw counters.

use serde::{Deserialize, Serialize};

/// The metrics derived from a campaign's raw delivery counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Click-through rate: clicks / impressions × 100.
    pub ctr: f64,
    /// Cost per click: budget / clicks.
    pub cpc: f64,
    /// Conversion rate: conversions / clicks × 100.
    pub conversion_rate: f64,
}

/// Compute CTR, CPC, and conversion rate, each rounded to two decimal
/// places. A zero denominator degrades to 0.0 (no activity, no rate to
/// report).
pub fn compute_metrics(
    budget: f64,
    impressions: u64,
    clicks: u64,
    conversions: u64,
) -> DerivedMetrics {
    let ctr = if impressions > 0 {
        round2(clicks as f64 / impressions as f64 * 100.0)
    } else {
        0.0
    };
    let cpc = if clicks > 0 {
        round2(budget / clicks as f64)
    } else {
        0.0
    };
    let conversion_rate = if clicks > 0 {
        round2(conversions as f64 / clicks as f64 * 100.0)
    } else {
        0.0
    };

    DerivedMetrics {
        ctr,
        cpc,
        conversion_rate,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_all_three_metrics() {
        let m = compute_metrics(5000.0, 150_000, 4500, 180);
        assert!((m.ctr - 3.0).abs() < f64::EPSILON);
        assert!((m.cpc - 1.11).abs() < f64::EPSILON);
        assert!((m.conversion_rate - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_impressions_yields_zero_ctr() {
        let m = compute_metrics(1000.0, 0, 0, 0);
        assert_eq!(m.ctr, 0.0);
    }

    #[test]
    fn test_zero_clicks_yields_zero_cpc_and_conversion_rate() {
        let m = compute_metrics(1000.0, 50_000, 0, 0);
        assert_eq!(m.cpc, 0.0);
        assert_eq!(m.conversion_rate, 0.0);
        // Impressions without clicks still produce a (zero) CTR.
        assert_eq!(m.ctr, 0.0);
    }

    #[test]
    fn test_rounds_to_two_decimal_places() {
        // 1000 / 3 = 333.333... -> 333.33
        let m = compute_metrics(1000.0, 900, 3, 1);
        assert!((m.cpc - 333.33).abs() < f64::EPSILON);
        // 1 / 3 * 100 = 33.333... -> 33.33
        assert!((m.conversion_rate - 33.33).abs() < f64::EPSILON);
    }
}
