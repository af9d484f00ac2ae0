//! The issue catalog: one immutable definition per detectable issue.
//!
//! Each definition carries pre-written root causes and recommended
//! actions, looked up by [`IssueKind`]. Definitions are `'static` and
//! never constructed ad hoc; the engine copies the matched definition
//! into an [`crate::engine::Issue`] together with the observed value.

use serde::{Deserialize, Serialize};

/// Machine-readable identifier for each detectable issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    LowCtrCritical,
    LowCtrWarning,
    HighCpcCritical,
    HighCpcWarning,
    LowConversionCritical,
    LowConversionWarning,
    TrackingFailure,
    BudgetExhausted,
    BudgetLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// A catalog entry: what the issue is, why it happens, what to do about
/// it, and how many points it costs the health score.
#[derive(Debug, Clone, Copy)]
pub struct IssueDefinition {
    pub kind: IssueKind,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub root_causes: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub score_deduction: u32,
}

impl IssueKind {
    /// All kinds, in rule-evaluation order.
    pub const ALL: [IssueKind; 9] = [
        IssueKind::LowCtrCritical,
        IssueKind::LowCtrWarning,
        IssueKind::HighCpcCritical,
        IssueKind::HighCpcWarning,
        IssueKind::LowConversionCritical,
        IssueKind::LowConversionWarning,
        IssueKind::TrackingFailure,
        IssueKind::BudgetExhausted,
        IssueKind::BudgetLow,
    ];

    /// The wire name of this kind, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::LowCtrCritical => "LOW_CTR_CRITICAL",
            IssueKind::LowCtrWarning => "LOW_CTR_WARNING",
            IssueKind::HighCpcCritical => "HIGH_CPC_CRITICAL",
            IssueKind::HighCpcWarning => "HIGH_CPC_WARNING",
            IssueKind::LowConversionCritical => "LOW_CONVERSION_CRITICAL",
            IssueKind::LowConversionWarning => "LOW_CONVERSION_WARNING",
            IssueKind::TrackingFailure => "TRACKING_FAILURE",
            IssueKind::BudgetExhausted => "BUDGET_EXHAUSTED",
            IssueKind::BudgetLow => "BUDGET_LOW",
        }
    }

    /// The catalog entry for this kind.
    pub fn definition(self) -> &'static IssueDefinition {
        match self {
            IssueKind::LowCtrCritical => &LOW_CTR_CRITICAL,
            IssueKind::LowCtrWarning => &LOW_CTR_WARNING,
            IssueKind::HighCpcCritical => &HIGH_CPC_CRITICAL,
            IssueKind::HighCpcWarning => &HIGH_CPC_WARNING,
            IssueKind::LowConversionCritical => &LOW_CONVERSION_CRITICAL,
            IssueKind::LowConversionWarning => &LOW_CONVERSION_WARNING,
            IssueKind::TrackingFailure => &TRACKING_FAILURE,
            IssueKind::BudgetExhausted => &BUDGET_EXHAUSTED,
            IssueKind::BudgetLow => &BUDGET_LOW,
        }
    }
}

static LOW_CTR_CRITICAL: IssueDefinition = IssueDefinition {
    kind: IssueKind::LowCtrCritical,
    severity: Severity::Critical,
    title: "Critically Low Click-Through Rate",
    description: "Your CTR is below 0.5%. This means almost nobody who sees your ad clicks on it.",
    root_causes: &[
        "Ad creative is not engaging or relevant to the audience",
        "Ad copy headline is weak or not attention-grabbing",
        "Wrong audience targeting - showing ads to wrong people",
        "Ad fatigue - same people seeing your ad too many times",
        "Poor ad placement or format mismatch",
        "Competitor ads are more attractive",
    ],
    recommendations: &[
        "A/B test new ad creatives with different images and headlines",
        "Review and refine your audience targeting parameters",
        "Add a stronger call-to-action (CTA) like 'Get 50% Off Today'",
        "Refresh ad creative every 2-3 weeks to fight ad fatigue",
        "Check if ad format matches placement (e.g., square for Instagram)",
        "Research competitor ads for inspiration (use Facebook Ad Library)",
    ],
    score_deduction: 25,
};

static LOW_CTR_WARNING: IssueDefinition = IssueDefinition {
    kind: IssueKind::LowCtrWarning,
    severity: Severity::Warning,
    title: "Low Click-Through Rate",
    description: "Your CTR is below 1.0%. There's room for improvement.",
    root_causes: &[
        "Ad creative could be more compelling",
        "Targeting might be slightly off",
        "Value proposition not clear enough",
    ],
    recommendations: &[
        "Test new headlines emphasizing benefits, not features",
        "Add social proof (e.g., '10,000 customers love us')",
        "Try different ad formats (carousel, video, static)",
    ],
    score_deduction: 10,
};

static HIGH_CPC_CRITICAL: IssueDefinition = IssueDefinition {
    kind: IssueKind::HighCpcCritical,
    severity: Severity::Critical,
    title: "Critically High Cost Per Click",
    description: "Each click is costing more than $10. Your budget is burning fast.",
    root_causes: &[
        "High competition for the keywords/audience you're targeting",
        "Low Quality Score (Google) or Relevance Score (Facebook) - ads deemed irrelevant",
        "Bidding strategy too aggressive",
        "Targeting too narrow, inflating competition",
        "Ad extensions not being used (reduces Quality Score)",
    ],
    recommendations: &[
        "Improve ad Quality Score by aligning ad, keyword, and landing page",
        "Test manual bidding vs. automated bidding strategies",
        "Expand audience targeting to reduce competition pressure",
        "Add negative keywords to filter irrelevant clicks",
        "Try long-tail keywords which typically have lower CPC",
        "Improve landing page relevance and load speed",
    ],
    score_deduction: 20,
};

static HIGH_CPC_WARNING: IssueDefinition = IssueDefinition {
    kind: IssueKind::HighCpcWarning,
    severity: Severity::Warning,
    title: "High Cost Per Click",
    description: "CPC is above $5. Monitor to prevent budget waste.",
    root_causes: &[
        "Moderate competition in your targeting",
        "Quality Score could be improved",
    ],
    recommendations: &[
        "Review keyword bids and adjust down for low-converting ones",
        "Test enhanced CPC or target CPA bidding",
    ],
    score_deduction: 8,
};

static LOW_CONVERSION_CRITICAL: IssueDefinition = IssueDefinition {
    kind: IssueKind::LowConversionCritical,
    severity: Severity::Critical,
    title: "Critically Low Conversion Rate",
    description: "Less than 1% of clicks convert. People click but don't complete the desired action.",
    root_causes: &[
        "Landing page doesn't match the ad's promise (message mismatch)",
        "Landing page loads slowly (each second of delay drops conversions ~7%)",
        "Checkout/signup process is too long or complicated",
        "Lack of trust signals (no reviews, no security badges)",
        "Mobile experience is poor (landing page not mobile-optimized)",
        "Wrong audience - clicks from people with no purchase intent",
        "Conversion tracking pixel/tag is broken (tracking failure)",
    ],
    recommendations: &[
        "Ensure landing page headline matches the ad copy exactly",
        "Test landing page load speed at PageSpeed Insights",
        "Simplify the conversion form - remove unnecessary fields",
        "Add trust signals: reviews, testimonials, security badges, guarantees",
        "Test mobile responsiveness on multiple devices",
        "Set up heatmaps (Hotjar/Microsoft Clarity) to see where users drop off",
        "Check that conversion tracking pixel fires correctly",
    ],
    score_deduction: 25,
};

static LOW_CONVERSION_WARNING: IssueDefinition = IssueDefinition {
    kind: IssueKind::LowConversionWarning,
    severity: Severity::Warning,
    title: "Below-Average Conversion Rate",
    description: "Conversion rate is below 2%. Improving this would significantly boost ROI.",
    root_causes: &[
        "Landing page experience needs improvement",
        "Offer could be more compelling",
    ],
    recommendations: &[
        "Test different landing page layouts and CTAs",
        "Offer a stronger incentive (discount, free trial, guarantee)",
        "Add an exit-intent popup to capture hesitant visitors",
    ],
    score_deduction: 10,
};

static TRACKING_FAILURE: IssueDefinition = IssueDefinition {
    kind: IssueKind::TrackingFailure,
    severity: Severity::Critical,
    title: "Possible Tracking Failure",
    description: "Zero conversions with significant clicks is unusual. Your conversion tracking may be broken.",
    root_causes: &[
        "Conversion pixel/tag not installed on the Thank You page",
        "Tag Manager container not published after adding new tag",
        "Conversion event fires on wrong page",
        "Script blocked by browser ad blockers",
        "iOS 14+ privacy changes blocking conversion tracking",
        "Page redirect breaking the pixel fire",
    ],
    recommendations: &[
        "Use Google Tag Assistant or Facebook Pixel Helper browser extension to verify",
        "Check Tag Manager and ensure container is published",
        "Test conversion flow manually and watch for pixel fire in browser console",
        "Consider server-side tracking to bypass ad blockers",
        "Implement Meta CAPI or Google Enhanced Conversions for better tracking",
        "Review pixel placement - it must fire AFTER the conversion happens",
    ],
    score_deduction: 30,
};

static BUDGET_EXHAUSTED: IssueDefinition = IssueDefinition {
    kind: IssueKind::BudgetExhausted,
    severity: Severity::Critical,
    title: "Budget Nearly Exhausted",
    description: "Less than 5% of budget remaining. Ads may stop running soon.",
    root_causes: &[
        "Campaign budget set too low for the target audience size",
        "High CPC consuming budget faster than expected",
        "Campaign running too many ad sets or audiences simultaneously",
        "No daily budget cap set (monthly budget spent too quickly)",
    ],
    recommendations: &[
        "Increase budget or pause underperforming ad sets",
        "Set daily budget limits to pace spending evenly",
        "Pause campaigns with poor ROAS until budget is replenished",
        "Reduce audience size to make budget go further",
    ],
    score_deduction: 15,
};

static BUDGET_LOW: IssueDefinition = IssueDefinition {
    kind: IssueKind::BudgetLow,
    severity: Severity::Warning,
    title: "Budget Running Low",
    description: "Less than 20% of budget remaining. Plan to replenish soon.",
    root_causes: &[
        "Budget pacing is ahead of schedule",
        "Higher than expected click volume",
    ],
    recommendations: &[
        "Review budget pacing in campaign settings",
        "Consider increasing budget if performance is good",
    ],
    score_deduction: 5,
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_resolves_to_its_own_definition() {
        for kind in IssueKind::ALL {
            let def = kind.definition();
            assert_eq!(def.kind, kind);
            assert!(!def.title.is_empty());
            assert!(!def.description.is_empty());
            assert!(!def.root_causes.is_empty());
            assert!(!def.recommendations.is_empty());
            assert!(def.score_deduction > 0);
        }
    }

    #[test]
    fn test_kind_serializes_to_wire_vocabulary() {
        let json = serde_json::to_string(&IssueKind::LowCtrCritical).unwrap();
        assert_eq!(json, "\"LOW_CTR_CRITICAL\"");
        let json = serde_json::to_string(&IssueKind::TrackingFailure).unwrap();
        assert_eq!(json, "\"TRACKING_FAILURE\"");
    }

    #[test]
    fn test_as_str_matches_serialized_form() {
        for kind in IssueKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn test_critical_tiers_outweigh_warning_tiers() {
        let pairs = [
            (IssueKind::LowCtrCritical, IssueKind::LowCtrWarning),
            (IssueKind::HighCpcCritical, IssueKind::HighCpcWarning),
            (IssueKind::LowConversionCritical, IssueKind::LowConversionWarning),
            (IssueKind::BudgetExhausted, IssueKind::BudgetLow),
        ];
        for (critical, warning) in pairs {
            assert!(
                critical.definition().score_deduction > warning.definition().score_deduction,
                "{:?} should deduct more than {:?}",
                critical,
                warning
            );
        }
    }
}
