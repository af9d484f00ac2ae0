//! Axum REST handlers for the campaign API.

use crate::models::*;
use crate::store::ScopeStore;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use scope_core::Campaign;
use scope_diagnostics::{diagnose, Diagnosis};
use scope_reporting::{render, report_filename, ReportFormat};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Shared API state.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<ScopeStore>,
    pub start_time: Instant,
}

// ─── Probes ────────────────────────────────────────────────────────────────

pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /live — liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(State(state): State<ApiState>) -> Json<CampaignListResponse> {
    let campaigns = state.store.list_campaigns();
    let count = campaigns.len();
    Json(CampaignListResponse { campaigns, count })
}

pub async fn get_campaign(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .get_campaign(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_campaign(
    State(state): State<ApiState>,
    Json(req): Json<CreateCampaignRequest>,
) -> (StatusCode, Json<Campaign>) {
    let campaign = state.store.create_campaign(&req);
    metrics::counter!("scope.campaigns.created").increment(1);
    (StatusCode::CREATED, Json(campaign))
}

pub async fn delete_campaign(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_campaign(id) {
        metrics::counter!("scope.campaigns.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// ─── Diagnostics ───────────────────────────────────────────────────────────

pub async fn diagnose_campaign(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Diagnosis>, StatusCode> {
    let campaign = state.store.get_campaign(id).ok_or(StatusCode::NOT_FOUND)?;
    let diagnosis = diagnose(&campaign);
    metrics::counter!("scope.diagnoses.run").increment(1);
    Ok(Json(diagnosis))
}

/// Diagnosis rollup across every stored campaign.
pub async fn insights(State(state): State<ApiState>) -> Json<InsightsResponse> {
    let insights = state
        .store
        .list_campaigns()
        .iter()
        .map(|campaign| {
            let diagnosis = diagnose(campaign);
            CampaignInsight {
                campaign_id: campaign.id,
                campaign_name: campaign.name.clone(),
                issues_found: diagnosis.issues.len(),
                health_score: diagnosis.health_score,
                top_issue: diagnosis
                    .issues
                    .first()
                    .map(|i| i.kind.as_str().to_string())
                    .unwrap_or_else(|| "None".to_string()),
            }
        })
        .collect();
    Json(InsightsResponse { insights })
}

// ─── Reports ───────────────────────────────────────────────────────────────

pub async fn campaign_report(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    let format = match query.format.as_deref() {
        None | Some("text") => ReportFormat::Text,
        Some("json") => ReportFormat::Json,
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    };

    let campaign = state.store.get_campaign(id).ok_or(StatusCode::NOT_FOUND)?;
    let diagnosis = diagnose(&campaign);
    let generated_at = Utc::now();

    let body = render(&campaign, &diagnosis, generated_at, format)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let filename = report_filename(&campaign, generated_at, format);
    metrics::counter!("scope.reports.generated").increment(1);

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    ))
}

// ─── Demo data ─────────────────────────────────────────────────────────────

pub async fn seed_demo(State(state): State<ApiState>) -> Json<SeedResponse> {
    let count = state.store.seed_demo_campaigns();
    Json(SeedResponse {
        message: format!("Seeded {} example campaigns", count),
        count,
    })
}
