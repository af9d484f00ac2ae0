//! In-memory campaign store backed by DashMap.
//!
//! Production: replace with an ACID store (sqlx/PostgreSQL) behind the
//! same API surface. Derived metrics are recomputed here whenever the
//! raw counters are written, so stored records always satisfy the
//! derivation invariant.

use crate::models::CreateCampaignRequest;
use chrono::Utc;
use dashmap::DashMap;
use scope_core::types::CampaignStatus;
use scope_core::Campaign;
use scope_diagnostics::compute_metrics;
use tracing::info;
use uuid::Uuid;

/// Thread-safe in-memory store for campaign records.
pub struct ScopeStore {
    campaigns: DashMap<Uuid, Campaign>,
}

impl ScopeStore {
    pub fn new() -> Self {
        info!("Campaign store initialized (in-memory, development mode)");
        Self {
            campaigns: DashMap::new(),
        }
    }

    /// All campaigns, newest first.
    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_campaign(&self, id: Uuid) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    /// Build and insert a campaign record from a create request. Counters
    /// are sanitized and the derived metrics computed here.
    pub fn create_campaign(&self, req: &CreateCampaignRequest) -> Campaign {
        let (budget, impressions, clicks, conversions) = req.sanitized();
        let metrics = compute_metrics(budget, impressions, clicks, conversions);

        let campaign = Campaign {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            budget,
            impressions,
            clicks,
            conversions,
            ctr: metrics.ctr,
            cpc: metrics.cpc,
            conversion_rate: metrics.conversion_rate,
            status: CampaignStatus::Active,
            created_at: Utc::now(),
        };
        self.campaigns.insert(campaign.id, campaign.clone());
        campaign
    }

    pub fn delete_campaign(&self, id: Uuid) -> bool {
        self.campaigns.remove(&id).is_some()
    }

    /// Load the example campaigns, each demonstrating a different issue:
    /// healthy delivery, low CTR, high CPC, a tracking failure, budget
    /// exhaustion, and a campaign where everything is broken at once.
    pub fn seed_demo_campaigns(&self) -> usize {
        let examples: [(&str, f64, u64, u64, u64); 6] = [
            ("Spring Sale - Google Search (Healthy)", 5000.0, 150_000, 4500, 180),
            ("Brand Awareness - Display Network (Low CTR)", 3000.0, 500_000, 1000, 25),
            ("Competitor Keywords - Search (High CPC)", 8000.0, 20_000, 600, 18),
            ("Black Friday - Retargeting (Tracking Issue)", 4500.0, 80_000, 2400, 0),
            ("Holiday Rush - Facebook (Budget Exhausted)", 1000.0, 45_000, 990, 30),
            ("New Product Launch - Broken Campaign", 2000.0, 900_000, 900, 0),
        ];

        for (name, budget, impressions, clicks, conversions) in examples {
            let req = CreateCampaignRequest {
                name: name.to_string(),
                budget,
                impressions: impressions as i64,
                clicks: clicks as i64,
                conversions: conversions as i64,
            };
            self.create_campaign(&req);
        }

        info!(count = examples.len(), "Seeded demo campaigns");
        examples.len()
    }
}

impl Default for ScopeStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use scope_diagnostics::{diagnose, HealthStatus, IssueKind};

    fn request(name: &str, budget: f64, impressions: i64, clicks: i64, conversions: i64) -> CreateCampaignRequest {
        CreateCampaignRequest {
            name: name.to_string(),
            budget,
            impressions,
            clicks,
            conversions,
        }
    }

    // 1. CRUD -----------------------------------------------------------

    #[test]
    fn test_create_computes_derived_metrics() {
        let store = ScopeStore::new();
        let campaign = store.create_campaign(&request("Test", 5000.0, 150_000, 4500, 180));

        assert!((campaign.ctr - 3.0).abs() < f64::EPSILON);
        assert!((campaign.cpc - 1.11).abs() < f64::EPSILON);
        assert!((campaign.conversion_rate - 4.0).abs() < f64::EPSILON);
        assert_eq!(campaign.status, CampaignStatus::Active);

        let fetched = store.get_campaign(campaign.id).unwrap();
        assert_eq!(fetched.name, "Test");
    }

    #[test]
    fn test_create_clamps_negative_counters_to_zero() {
        let store = ScopeStore::new();
        let campaign = store.create_campaign(&request("Bad Input", -100.0, -5, -3, -1));

        assert_eq!(campaign.budget, 0.0);
        assert_eq!(campaign.impressions, 0);
        assert_eq!(campaign.clicks, 0);
        assert_eq!(campaign.conversions, 0);
        // Derived metrics degrade to zero rather than erroring.
        assert_eq!(campaign.ctr, 0.0);
        assert_eq!(campaign.cpc, 0.0);
    }

    #[test]
    fn test_list_returns_newest_first() {
        let store = ScopeStore::new();
        store.create_campaign(&request("First", 100.0, 1000, 10, 1));
        store.create_campaign(&request("Second", 100.0, 1000, 10, 1));

        let listed = store.list_campaigns();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[test]
    fn test_delete_removes_campaign() {
        let store = ScopeStore::new();
        let campaign = store.create_campaign(&request("Doomed", 100.0, 1000, 10, 1));

        assert!(store.delete_campaign(campaign.id));
        assert!(store.get_campaign(campaign.id).is_none());
        // Second delete is a no-op.
        assert!(!store.delete_campaign(campaign.id));
    }

    // 2. Demo data ------------------------------------------------------

    #[test]
    fn test_seed_creates_six_campaigns() {
        let store = ScopeStore::new();
        assert_eq!(store.seed_demo_campaigns(), 6);
        assert_eq!(store.list_campaigns().len(), 6);
    }

    #[test]
    fn test_seeded_campaigns_cover_the_issue_spectrum() {
        let store = ScopeStore::new();
        store.seed_demo_campaigns();

        let find = |needle: &str| {
            store
                .list_campaigns()
                .into_iter()
                .find(|c| c.name.contains(needle))
                .unwrap()
        };

        let healthy = diagnose(&find("Healthy"));
        assert_eq!(healthy.status, HealthStatus::Healthy);

        let low_ctr = diagnose(&find("Low CTR"));
        assert!(low_ctr.issues.iter().any(|i| i.kind == IssueKind::LowCtrCritical));

        let high_cpc = diagnose(&find("High CPC"));
        assert!(high_cpc.issues.iter().any(|i| i.kind == IssueKind::HighCpcCritical));

        let tracking = diagnose(&find("Tracking Issue"));
        assert!(tracking.issues.iter().any(|i| i.kind == IssueKind::TrackingFailure));

        let exhausted = diagnose(&find("Budget Exhausted"));
        assert!(exhausted.issues.iter().any(|i| i.kind == IssueKind::BudgetExhausted));

        let broken = diagnose(&find("Broken Campaign"));
        assert!(broken.health_score < 50);
        assert_eq!(broken.status, HealthStatus::Critical);
        assert!(broken.issues.len() >= 3);
    }
}
