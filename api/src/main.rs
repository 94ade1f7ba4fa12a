//! Journal API Server
//!
//! A personal journal: entries are submitted through HTML forms, classified
//! by sentiment and stored in a SQL database.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{ensure_schema, LexiconSentimentAnalyzer, SqlEntryRepository};
use app::EntryService;
use config::Config;
use domain::ports::{EntryRepository, SentimentAnalyzer};
use error::StartupError;

/// Application state shared across all handlers
pub struct AppState<ER, SA>
where
    ER: EntryRepository,
    SA: SentimentAnalyzer,
{
    pub entry_service: Arc<EntryService<ER, SA>>,
}

impl<ER, SA> Clone for AppState<ER, SA>
where
    ER: EntryRepository,
    SA: SentimentAnalyzer,
{
    fn clone(&self) -> Self {
        Self {
            entry_service: self.entry_service.clone(),
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

/// Build the router for the journal pages
pub fn build_router<ER, SA>(state: AppState<ER, SA>) -> Router
where
    ER: EntryRepository + 'static,
    SA: SentimentAnalyzer + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/",
            get(handlers::list_entries::<ER, SA>).post(handlers::create_entry::<ER, SA>),
        )
        .route(
            "/new",
            get(handlers::new_entry_form).post(handlers::submit_new_entry::<ER, SA>),
        )
        .route("/entry/:id", get(handlers::get_entry::<ER, SA>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,journal_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Journal API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to the entry store; failure here aborts startup
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .map_err(StartupError::Connect)?;
    tracing::info!("Database connected");

    ensure_schema(&db).await.map_err(StartupError::Schema)?;

    // Create adapters
    let entry_repo = Arc::new(SqlEntryRepository::new(db));
    let analyzer = Arc::new(
        LexiconSentimentAnalyzer::new().context("Failed to build sentiment analyzer")?,
    );

    // Create application services
    let entry_service = Arc::new(EntryService::new(entry_repo, analyzer));

    if config.seed_on_empty {
        entry_service
            .seed_if_empty()
            .await
            .map_err(StartupError::Seed)?;
    }

    let state = AppState { entry_service };
    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Journal API stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down...");
}
