//! CampaignScope — ad campaign health diagnostics service.
//!
//! Main entry point: loads configuration, optionally seeds demo data,
//! and starts the HTTP API and metrics exporter.

use clap::Parser;
use scope_core::config::AppConfig;
use scope_management::{api_router, ScopeStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "campaign-scope")]
#[command(about = "Ad campaign health diagnostics service")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_SCOPE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics port (overrides config)
    #[arg(long, env = "CAMPAIGN_SCOPE__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Seed the store with example campaigns on startup
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_scope=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("CampaignScope starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }
    if cli.seed_demo {
        config.seed_demo = true;
    }

    info!(
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        seed_demo = config.seed_demo,
        "Configuration loaded"
    );

    // Initialize the campaign store
    let store = Arc::new(ScopeStore::new());
    if config.seed_demo {
        let count = store.seed_demo_campaigns();
        info!(count, "Demo campaigns loaded");
    }

    // Start metrics exporter
    if let Err(e) = start_metrics(&config) {
        error!(error = %e, "Failed to start metrics exporter");
    }

    // Assemble the HTTP app
    let app = api_router(store)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.api.host.parse()?, config.api.http_port);

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Start the Prometheus exporter on its own port.
fn start_metrics(config: &AppConfig) -> anyhow::Result<()> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(SocketAddr::new(
            config.api.host.parse()?,
            config.metrics.port,
        ))
        .install()?;

    info!(port = config.metrics.port, "Metrics exporter started");
    Ok(())
}
