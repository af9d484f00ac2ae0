//! API router — mounts the campaign endpoints under /api/v1.

use crate::handlers::{self, ApiState};
use crate::store::ScopeStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the API router over a shared store. The caller adds middleware
/// layers and serves it.
pub fn api_router(store: Arc<ScopeStore>) -> Router {
    let state = ApiState {
        store,
        start_time: std::time::Instant::now(),
    };

    Router::new()
        // Probes
        .route("/health", get(handlers::health_check))
        .route("/live", get(handlers::liveness))
        // Campaigns
        .route(
            "/api/v1/campaigns",
            get(handlers::list_campaigns).post(handlers::create_campaign),
        )
        .route(
            "/api/v1/campaigns/:id",
            get(handlers::get_campaign).delete(handlers::delete_campaign),
        )
        // Diagnostics
        .route(
            "/api/v1/campaigns/:id/diagnosis",
            get(handlers::diagnose_campaign),
        )
        .route("/api/v1/insights", get(handlers::insights))
        // Reports
        .route("/api/v1/campaigns/:id/report", get(handlers::campaign_report))
        // Demo data
        .route("/api/v1/seed", post(handlers::seed_demo))
        .with_state(state)
}
