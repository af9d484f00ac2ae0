use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored ad campaign: raw delivery counters plus the metrics derived
/// from them.
///
/// `ctr`, `cpc`, and `conversion_rate` are recomputed from the raw
/// counters whenever the counters change; they are never mutated
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    /// Total allocated budget in the account currency.
    pub budget: f64,
    /// How many times the ad was shown.
    pub impressions: u64,
    /// How many times the ad was clicked.
    pub clicks: u64,
    /// Completed desired actions (purchase, signup) after a click.
    pub conversions: u64,
    /// Click-through rate, percent. Derived.
    pub ctr: f64,
    /// Cost per click, currency. Derived.
    pub cpc: f64,
    /// Conversions per click, percent. Derived.
    pub conversion_rate: f64,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Archived,
}

impl Default for CampaignStatus {
    fn default() -> Self {
        CampaignStatus::Active
    }
}
