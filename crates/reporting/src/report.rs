//! Report generation: plain-text and JSON exports of a campaign
//! diagnosis.
//!
//! The renderer is a pure function over the campaign and its diagnosis;
//! callers choose the export format and supply the generation timestamp.

use chrono::{DateTime, Utc};
use scope_core::{Campaign, ScopeResult};
use scope_diagnostics::{Diagnosis, HealthStatus, Severity, THRESHOLDS};
use serde::Serialize;

/// Maximum root causes listed per issue in the text report.
const MAX_ROOT_CAUSES: usize = 3;
/// Maximum recommendations listed in the text report.
const MAX_RECOMMENDATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain; charset=utf-8",
            ReportFormat::Json => "application/json",
        }
    }
}

/// Filename for a downloaded report, stamped with the campaign id and
/// generation time.
pub fn report_filename(
    campaign: &Campaign,
    generated_at: DateTime<Utc>,
    format: ReportFormat,
) -> String {
    format!(
        "campaign_{}_report_{}.{}",
        campaign.id,
        generated_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Render the report document in the requested format.
pub fn render(
    campaign: &Campaign,
    diagnosis: &Diagnosis,
    generated_at: DateTime<Utc>,
    format: ReportFormat,
) -> ScopeResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(campaign, diagnosis, generated_at)),
        ReportFormat::Json => render_json(campaign, diagnosis, generated_at),
    }
}

fn render_text(campaign: &Campaign, diagnosis: &Diagnosis, generated_at: DateTime<Utc>) -> String {
    let t = &THRESHOLDS;
    let m = &diagnosis.metrics_analyzed;

    let mut lines: Vec<String> = vec![
        "=".repeat(60),
        "  AD CAMPAIGN REPORT".to_string(),
        format!("  Generated: {}", generated_at.format("%B %d, %Y at %H:%M")),
        "=".repeat(60),
        String::new(),
        format!("Campaign: {}", campaign.name),
        format!("Health Score: {}/100", diagnosis.health_score),
        format!("Status: {}", status_label(diagnosis.status)),
        String::new(),
        "--- CAMPAIGN OVERVIEW ---".to_string(),
        format!("Budget: ${:.2}", campaign.budget),
        format!("Impressions: {}", campaign.impressions),
        format!("Clicks: {}", campaign.clicks),
        format!("Conversions: {}", campaign.conversions),
        String::new(),
        "--- KEY METRICS ---".to_string(),
        format!("CTR: {}%  (>= {}% is good)", m.ctr, t.ctr.good),
        format!("CPC: ${}  (<= ${:.2} is good)", m.cpc, t.cpc.warning),
        format!(
            "Conversion Rate: {}%  (>= {}% is good)",
            m.conversion_rate, t.conversion_rate.warning
        ),
        format!(
            "Budget Remaining: {}%  (>= {}% is safe)",
            m.budget_remaining_pct, t.budget_remaining_pct.low
        ),
        String::new(),
        format!("--- ISSUES DETECTED ({} found) ---", diagnosis.issues.len()),
    ];

    if diagnosis.issues.is_empty() {
        lines.push("No issues detected. Campaign is healthy!".to_string());
    } else {
        for issue in &diagnosis.issues {
            lines.push(format!("[{}] {}", severity_label(issue.severity), issue.title));
            lines.push(format!("  {}", issue.description));
            if !issue.root_causes.is_empty() {
                lines.push("  Possible root causes:".to_string());
                for cause in issue.root_causes.iter().take(MAX_ROOT_CAUSES) {
                    lines.push(format!("    - {}", cause));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push("--- RECOMMENDATIONS ---".to_string());
    for (i, rec) in diagnosis
        .recommendations
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
    {
        lines.push(format!("{}. {}", i + 1, rec));
    }

    lines.push(String::new());
    lines.push("-".repeat(60));
    lines.push("Generated by CampaignScope".to_string());

    lines.join("\n")
}

fn render_json(
    campaign: &Campaign,
    diagnosis: &Diagnosis,
    generated_at: DateTime<Utc>,
) -> ScopeResult<String> {
    #[derive(Serialize)]
    struct ReportDocument<'a> {
        generated_at: DateTime<Utc>,
        campaign: &'a Campaign,
        diagnosis: &'a Diagnosis,
    }

    let doc = ReportDocument {
        generated_at,
        campaign,
        diagnosis,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn status_label(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "HEALTHY",
        HealthStatus::Warning => "WARNING",
        HealthStatus::Critical => "CRITICAL",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "CRITICAL",
        Severity::Warning => "WARNING",
        Severity::Info => "INFO",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use scope_core::types::CampaignStatus;
    use scope_diagnostics::{compute_metrics, diagnose};
    use uuid::Uuid;

    fn sample_campaign(budget: f64, impressions: u64, clicks: u64, conversions: u64) -> Campaign {
        let m = compute_metrics(budget, impressions, clicks, conversions);
        Campaign {
            id: Uuid::new_v4(),
            name: "Brand Awareness - Display Network".to_string(),
            budget,
            impressions,
            clicks,
            conversions,
            ctr: m.ctr,
            cpc: m.cpc,
            conversion_rate: m.conversion_rate,
            status: CampaignStatus::Active,
            created_at: Utc::now(),
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_text_report_contains_all_sections() {
        let campaign = sample_campaign(3000.0, 500_000, 1000, 25);
        let diagnosis = diagnose(&campaign);
        let text = render(&campaign, &diagnosis, generated_at(), ReportFormat::Text).unwrap();

        assert!(text.contains("AD CAMPAIGN REPORT"));
        assert!(text.contains("Generated: March 14, 2025 at 09:30"));
        assert!(text.contains("Campaign: Brand Awareness - Display Network"));
        assert!(text.contains(&format!("Health Score: {}/100", diagnosis.health_score)));
        assert!(text.contains("--- KEY METRICS ---"));
        assert!(text.contains("--- RECOMMENDATIONS ---"));
        for issue in &diagnosis.issues {
            assert!(text.contains(&issue.title), "missing issue title: {}", issue.title);
        }
        // Recommendations are numbered from 1.
        assert!(text.contains(&format!("1. {}", diagnosis.recommendations[0])));
    }

    #[test]
    fn test_text_report_for_clean_campaign() {
        let mut campaign = sample_campaign(10_000.0, 150_000, 4500, 180);
        // Pin the CPC so the spend estimate leaves budget headroom and no
        // issue fires.
        campaign.cpc = 1.11;
        let diagnosis = diagnose(&campaign);

        let text = render(&campaign, &diagnosis, generated_at(), ReportFormat::Text).unwrap();
        assert!(text.contains("ISSUES DETECTED (0 found)"));
        assert!(text.contains("No issues detected. Campaign is healthy!"));
    }

    #[test]
    fn test_text_report_caps_root_causes_and_recommendations() {
        // A broken campaign firing several issues with long cause lists.
        let campaign = sample_campaign(15_000.0, 900_000, 900, 0);
        let diagnosis = diagnose(&campaign);
        let text = render(&campaign, &diagnosis, generated_at(), ReportFormat::Text).unwrap();

        // No more than eight numbered recommendations.
        assert!(text.contains("8. "));
        assert!(!text.contains("9. "));
        // The fourth root cause of the first issue is not listed.
        let first = &diagnosis.issues[0];
        assert!(first.root_causes.len() > MAX_ROOT_CAUSES);
        assert!(!text.contains(&first.root_causes[MAX_ROOT_CAUSES]));
    }

    #[test]
    fn test_json_report_round_trips() {
        let campaign = sample_campaign(3000.0, 500_000, 1000, 25);
        let diagnosis = diagnose(&campaign);
        let json = render(&campaign, &diagnosis, generated_at(), ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["campaign"]["name"], campaign.name);
        assert_eq!(
            value["diagnosis"]["health_score"],
            diagnosis.health_score as i64
        );
        assert!(value["diagnosis"]["issues"].is_array());
    }

    #[test]
    fn test_report_filename_carries_id_timestamp_and_extension() {
        let campaign = sample_campaign(3000.0, 500_000, 1000, 25);
        let name = report_filename(&campaign, generated_at(), ReportFormat::Text);
        assert!(name.starts_with(&format!("campaign_{}_report_", campaign.id)));
        assert!(name.ends_with("20250314_093000.txt"));

        let name = report_filename(&campaign, generated_at(), ReportFormat::Json);
        assert!(name.ends_with(".json"));
    }
}
