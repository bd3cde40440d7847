//! Lien Deadline Server
//!
//! REST API over `deadline-engine` for computing preliminary notice and
//! lien filing deadlines:
//!
//! - Deadline calculation per state, project type and claimant role
//! - Rule table lookup (all 51 jurisdictions, or one by code)
//! - Federal holiday listing per year
//!
//! The server is stateless: nothing is persisted between requests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
#[cfg(test)]
mod tests;

use api::{
    handle_calculate_deadline, handle_get_state_rule, handle_health, handle_list_holidays,
    handle_list_state_rules,
};

/// Command-line arguments for the deadline server
#[derive(Parser, Debug)]
#[command(name = "deadline-server")]
#[command(about = "HTTP API for construction lien deadlines")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: Arc<deadline_engine::DeadlineEngine>,
}

/// Routes without transport-level middleware (rate limiting, CORS)
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/calculate-deadline", post(handle_calculate_deadline))
        .route("/api/states", get(handle_list_state_rules))
        .route("/api/states/:code", get(handle_get_state_rule))
        .route("/api/holidays/:year", get(handle_list_holidays))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting deadline server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .context("invalid rate limit configuration")?,
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(AppState::default())
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!(
        "Rule table: {} jurisdictions",
        deadline_engine::rules::all_rules().len()
    );

    // The governor keys on the peer IP, which needs connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
