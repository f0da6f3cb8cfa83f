//! plan-checkout HTTP Server
//!
//! Axum-based server that turns `?plan=…&option=…` into a Stripe Checkout
//! session and redirects the browser to it.

mod app;
mod config;
mod handlers;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_payments::{Catalog, StripeClient};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Stripe is mandatory; refuse to start without a key
    let stripe = StripeClient::from_env()?;
    tracing::info!("✓ Stripe configured");

    let catalog = Catalog::standard();
    tracing::info!("Catalog loaded with {} entries", catalog.len());
    tracing::info!("  success_url: {}", config.redirect_urls.success_url);
    tracing::info!("  cancel_url:  {}", config.redirect_urls.cancel_url);

    let state = AppState::new(catalog, Arc::new(stripe), config.redirect_urls);
    let app = app::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 plan-checkout server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/checkout - Redirect to Stripe Checkout (?plan=…&option=…)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
