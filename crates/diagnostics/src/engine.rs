//! The diagnostic engine: rule evaluation, scoring, and summary.
//!
//! `diagnose` is a pure, total function over a campaign record — every
//! valid input produces a [`Diagnosis`], never an error. Rules run in a
//! fixed order, five independent groups, each firing at most one issue
//! (critical checked before warning, first match wins).

use crate::catalog::{IssueKind, Severity};
use crate::thresholds::{
    CONVERSION_CRITICAL_MIN_CLICKS, CONVERSION_WARNING_MIN_CLICKS, THRESHOLDS,
    TRACKING_FAILURE_MIN_CLICKS,
};
use scope_core::Campaign;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A detected rule violation: the matched catalog entry plus the observed
/// value and the threshold it crossed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub root_causes: Vec<String>,
    pub recommendations: Vec<String>,
    pub score_deduction: u32,
    pub metric_value: f64,
    pub threshold: f64,
}

impl Issue {
    fn new(kind: IssueKind, metric_value: f64, threshold: f64) -> Self {
        let def = kind.definition();
        Self {
            kind,
            severity: def.severity,
            title: def.title.to_string(),
            description: def.description.to_string(),
            root_causes: def.root_causes.iter().map(|s| s.to_string()).collect(),
            recommendations: def.recommendations.iter().map(|s| s.to_string()).collect(),
            score_deduction: def.score_deduction,
            metric_value,
            threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

/// The metric values the engine evaluated, echoed back for presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub ctr: f64,
    pub cpc: f64,
    pub conversion_rate: f64,
    pub budget_remaining_pct: f64,
}

/// The full result of one diagnostic run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub health_score: u8,
    pub status: HealthStatus,
    pub summary: String,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub metrics_analyzed: MetricsSnapshot,
}

/// Run every rule group against a campaign and assemble the diagnosis.
pub fn diagnose(campaign: &Campaign) -> Diagnosis {
    let mut issues: Vec<Issue> = Vec::new();
    // Signed accumulator: deductions may overshoot before the final clamp.
    let mut score: i32 = 100;

    let ctr = campaign.ctr;
    let cpc = campaign.cpc;
    let conversion_rate = campaign.conversion_rate;
    let budget = campaign.budget;
    let clicks = campaign.clicks;
    let conversions = campaign.conversions;

    // Spend is estimated as cpc * clicks; no ground-truth spend field
    // exists in the data model.
    let spent = cpc * clicks as f64;
    let budget_remaining_pct = if budget > 0.0 {
        (budget - spent) / budget * 100.0
    } else {
        // A zero declared budget means unlimited remaining budget.
        100.0
    };

    let t = &THRESHOLDS;

    // Rule 1: CTR.
    if ctr < t.ctr.critical {
        record(&mut issues, &mut score, IssueKind::LowCtrCritical, ctr, t.ctr.critical);
    } else if ctr < t.ctr.warning {
        record(&mut issues, &mut score, IssueKind::LowCtrWarning, ctr, t.ctr.warning);
    }

    // Rule 2: CPC.
    if cpc > t.cpc.critical {
        record(&mut issues, &mut score, IssueKind::HighCpcCritical, cpc, t.cpc.critical);
    } else if cpc > t.cpc.warning {
        record(&mut issues, &mut score, IssueKind::HighCpcWarning, cpc, t.cpc.warning);
    }

    // Rule 3: conversion rate, guarded by click volume so low-traffic
    // campaigns are not judged on statistically insignificant samples.
    if conversion_rate < t.conversion_rate.critical && clicks > CONVERSION_CRITICAL_MIN_CLICKS {
        record(
            &mut issues,
            &mut score,
            IssueKind::LowConversionCritical,
            conversion_rate,
            t.conversion_rate.critical,
        );
    } else if conversion_rate < t.conversion_rate.warning && clicks > CONVERSION_WARNING_MIN_CLICKS
    {
        record(
            &mut issues,
            &mut score,
            IssueKind::LowConversionWarning,
            conversion_rate,
            t.conversion_rate.warning,
        );
    }

    // Rule 4: heavy click volume with zero recorded conversions points at
    // broken conversion measurement, not a genuinely converting-at-zero ad.
    if clicks > TRACKING_FAILURE_MIN_CLICKS && conversions == 0 {
        record(&mut issues, &mut score, IssueKind::TrackingFailure, 0.0, 1.0);
    }

    // Rule 5: budget exhaustion.
    if budget_remaining_pct < t.budget_remaining_pct.exhausted {
        record(
            &mut issues,
            &mut score,
            IssueKind::BudgetExhausted,
            budget_remaining_pct,
            t.budget_remaining_pct.exhausted,
        );
    } else if budget_remaining_pct < t.budget_remaining_pct.low {
        record(
            &mut issues,
            &mut score,
            IssueKind::BudgetLow,
            budget_remaining_pct,
            t.budget_remaining_pct.low,
        );
    }

    // Clamp only after all deductions so stacked criticals floor at zero
    // instead of wrapping.
    let health_score = score.clamp(0, 100) as u8;

    let (status, summary) = if health_score >= 80 {
        (HealthStatus::Healthy, "Campaign is performing well")
    } else if health_score >= 50 {
        (HealthStatus::Warning, "Campaign has some issues that need attention")
    } else {
        (
            HealthStatus::Critical,
            "Campaign has critical issues requiring immediate action",
        )
    };

    let recommendations = collect_recommendations(&issues);

    Diagnosis {
        campaign_id: campaign.id,
        campaign_name: campaign.name.clone(),
        health_score,
        status,
        summary: summary.to_string(),
        issues,
        recommendations,
        metrics_analyzed: MetricsSnapshot {
            ctr,
            cpc,
            conversion_rate,
            budget_remaining_pct: round1(budget_remaining_pct),
        },
    }
}

fn record(issues: &mut Vec<Issue>, score: &mut i32, kind: IssueKind, value: f64, threshold: f64) {
    let issue = Issue::new(kind, value, threshold);
    *score -= issue.score_deduction as i32;
    issues.push(issue);
}

/// Recommendations across all issues, first-seen order, duplicates
/// collapsed.
fn collect_recommendations(issues: &[Issue]) -> Vec<String> {
    let mut all: Vec<String> = Vec::new();
    for issue in issues {
        for rec in &issue.recommendations {
            if !all.contains(rec) {
                all.push(rec.clone());
            }
        }
    }
    all
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
