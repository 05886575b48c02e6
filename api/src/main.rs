//! Waitlist API Server
//!
//! Accepts lead submissions from the CRM waitlist landing page, records them
//! in Airtable and announces them by email through Resend.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{AirtableLeadStore, ResendNotifier};
use app::LeadService;
use config::Config;
use domain::ports::{LeadNotifier, LeadStore};

/// Application state shared across all handlers
pub struct AppState<LS, N>
where
    LS: LeadStore,
    N: LeadNotifier,
{
    pub lead_service: Arc<LeadService<LS, N>>,
}

impl<LS, N> Clone for AppState<LS, N>
where
    LS: LeadStore,
    N: LeadNotifier,
{
    fn clone(&self) -> Self {
        Self {
            lead_service: self.lead_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// CORS policy for the landing page: any origin, preflight answered here
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// Build the router over any store and notifier implementation
pub fn router<LS, N>(state: AppState<LS, N>) -> Router
where
    LS: LeadStore + 'static,
    N: LeadNotifier + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Waitlist form submission
        .route("/submit-lead", post(handlers::submit_lead::<LS, N>))
        // Middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,waitlist_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting waitlist API...");

    // Load configuration
    let config = Config::from_env();
    for name in config.missing_credentials() {
        tracing::warn!("{} is not set; calls that need it will fail", name);
    }

    // Create adapters
    let store = Arc::new(AirtableLeadStore::new(
        config.airtable_api_url.clone(),
        config.airtable_api_key.clone(),
        config.airtable_base_id.clone(),
        config.airtable_table.clone(),
    ));
    let notifier = Arc::new(ResendNotifier::new(
        config.resend_api_url.clone(),
        config.resend_api_key.clone(),
    ));

    // Create application services
    let lead_service = Arc::new(LeadService::new(
        store,
        notifier,
        config.notification_settings(),
    ));

    let app = router(AppState { lead_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
