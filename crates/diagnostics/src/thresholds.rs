//! The threshold table: what counts as "bad" for each metric.
//!
//! Process-wide read-only configuration, never mutated at runtime. Real
//! benchmarks vary by industry; these are cross-industry averages.

/// Breakpoints for CTR, a lower-is-worse percentage.
#[derive(Debug, Clone, Copy)]
pub struct CtrThresholds {
    /// Below this, almost nobody who sees the ad clicks it.
    pub critical: f64,
    pub warning: f64,
    /// At or above this, the metric is considered healthy.
    pub good: f64,
}

/// Breakpoints for CPC, a higher-is-worse currency amount.
#[derive(Debug, Clone, Copy)]
pub struct CpcThresholds {
    pub warning: f64,
    pub critical: f64,
}

/// Breakpoints for conversion rate, a lower-is-worse percentage.
#[derive(Debug, Clone, Copy)]
pub struct ConversionThresholds {
    pub critical: f64,
    pub warning: f64,
    pub good: f64,
}

/// Breakpoints for remaining budget, as a percentage of total.
#[derive(Debug, Clone, Copy)]
pub struct BudgetThresholds {
    pub exhausted: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub ctr: CtrThresholds,
    pub cpc: CpcThresholds,
    pub conversion_rate: ConversionThresholds,
    pub budget_remaining_pct: BudgetThresholds,
}

pub const THRESHOLDS: Thresholds = Thresholds {
    ctr: CtrThresholds {
        critical: 0.5,
        warning: 1.0,
        good: 2.0,
    },
    cpc: CpcThresholds {
        warning: 5.0,
        critical: 10.0,
    },
    conversion_rate: ConversionThresholds {
        critical: 1.0,
        warning: 2.0,
        good: 5.0,
    },
    budget_remaining_pct: BudgetThresholds {
        exhausted: 5.0,
        low: 20.0,
    },
};

/// Minimum clicks before a critically low conversion rate is reported.
/// Low-traffic campaigns are exempt to avoid judging statistically
/// insignificant samples.
pub const CONVERSION_CRITICAL_MIN_CLICKS: u64 = 50;

/// Minimum clicks before a below-average conversion rate is reported.
pub const CONVERSION_WARNING_MIN_CLICKS: u64 = 20;

/// Minimum clicks before zero conversions is read as a tracking failure
/// rather than an unlucky sample.
pub const TRACKING_FAILURE_MIN_CLICKS: u64 = 100;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Lower-is-worse metrics must order critical < warning; higher-is-worse
    // the other way around. The engine's first-match-wins dispatch depends
    // on this.

    #[test]
    fn test_lower_is_worse_ordering() {
        assert!(THRESHOLDS.ctr.critical < THRESHOLDS.ctr.warning);
        assert!(THRESHOLDS.ctr.warning < THRESHOLDS.ctr.good);
        assert!(THRESHOLDS.conversion_rate.critical < THRESHOLDS.conversion_rate.warning);
        assert!(THRESHOLDS.conversion_rate.warning < THRESHOLDS.conversion_rate.good);
        assert!(THRESHOLDS.budget_remaining_pct.exhausted < THRESHOLDS.budget_remaining_pct.low);
    }

    #[test]
    fn test_higher_is_worse_ordering() {
        assert!(THRESHOLDS.cpc.warning < THRESHOLDS.cpc.critical);
    }

    #[test]
    fn test_sample_size_guards_are_nested() {
        // The critical guard must demand at least as much traffic as the
        // warning guard, otherwise a campaign could skip the milder tier.
        assert!(CONVERSION_WARNING_MIN_CLICKS <= CONVERSION_CRITICAL_MIN_CLICKS);
        assert!(CONVERSION_CRITICAL_MIN_CLICKS <= TRACKING_FAILURE_MIN_CLICKS);
    }
}
