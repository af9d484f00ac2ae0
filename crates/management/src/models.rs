//! REST request/response models for the campaign API.

use scope_core::Campaign;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/v1/campaigns`.
///
/// Counters arrive signed so that malformed clients can be tolerated:
/// this boundary normalizes negative numbers to zero before the record
/// reaches the engine.
#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub clicks: i64,
    #[serde(default)]
    pub conversions: i64,
}

impl CreateCampaignRequest {
    /// Normalized (budget, impressions, clicks, conversions) with
    /// negative input clamped to zero.
    pub fn sanitized(&self) -> (f64, u64, u64, u64) {
        (
            self.budget.max(0.0),
            self.impressions.max(0) as u64,
            self.clicks.max(0) as u64,
            self.conversions.max(0) as u64,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<Campaign>,
    pub count: usize,
}

/// One row of `GET /api/v1/insights`: the diagnosis rollup for a single
/// campaign.
#[derive(Debug, Serialize)]
pub struct CampaignInsight {
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub issues_found: usize,
    pub health_score: u8,
    /// Kind of the first detected issue, `"None"` for a clean campaign.
    pub top_issue: String,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<CampaignInsight>,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
}
