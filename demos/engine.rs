//! Trading engine example exercising the public and admin endpoints.
//!
//! Run with tracing enabled:
//! ```sh
//! ENGINE_URL=http://localhost:8080 RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off cargo run --example engine --features tracing
//! ```
//!
//! Admin calls run only when `ENGINE_ADMIN_PASSWORD` is set. `ENGINE_ADMIN_MODE` picks the
//! delivery (`query`, `bearer` or `header`); each endpoint's default is used otherwise.

use std::fs::File;

use purpletrader_client_sdk::auth::{AdminCredentials, AuthMode};
use purpletrader_client_sdk::engine::types::{Order, Side, Timeframe};
use purpletrader_client_sdk::engine::{Client, Config};
use purpletrader_client_sdk::types::{Uuid, dec};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

const DEFAULT_ENGINE_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let host = std::env::var("ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_owned());
    let client = Client::new(&host, Config::default())?;
    let symbol = "AAPL";

    match client.health().await {
        Ok(response) => info!(endpoint = "health", response = ?response),
        Err(e) => debug!(endpoint = "health", error = %e),
    }

    let order = Order::builder()
        .symbol(symbol)
        .side(Side::Buy)
        .quantity(dec!(10))
        .price(dec!(187.5))
        .client_order_id(Uuid::now_v7())
        .build();
    match client.submit_order(&order).await {
        Ok(response) => info!(endpoint = "submit_order", response = ?response),
        Err(e) => debug!(endpoint = "submit_order", error = %e),
    }

    match client.get_orderbook(symbol).await {
        Ok(response) => info!(endpoint = "get_orderbook", symbol, response = ?response),
        Err(e) => debug!(endpoint = "get_orderbook", symbol, error = %e),
    }

    match client.get_stats(symbol).await {
        Ok(response) => info!(endpoint = "get_stats", symbol, response = ?response),
        Err(e) => debug!(endpoint = "get_stats", symbol, error = %e),
    }

    match client.get_stats_timeframe(symbol, Timeframe::OneHour).await {
        Ok(response) => info!(endpoint = "get_stats_timeframe", symbol, response = ?response),
        Err(e) => debug!(endpoint = "get_stats_timeframe", symbol, error = %e),
    }

    match client.get_all_stats().await {
        Ok(response) => info!(endpoint = "get_all_stats", count = response.len()),
        Err(e) => debug!(endpoint = "get_all_stats", error = %e),
    }

    match client.get_stats_summary().await {
        Ok(response) => info!(endpoint = "get_stats_summary", response = ?response),
        Err(e) => debug!(endpoint = "get_stats_summary", error = %e),
    }

    match client.get_leaderboard().await {
        Ok(response) => info!(endpoint = "get_leaderboard", response = ?response),
        Err(e) => debug!(endpoint = "get_leaderboard", error = %e),
    }

    let Ok(password) = std::env::var("ENGINE_ADMIN_PASSWORD") else {
        info!("ENGINE_ADMIN_PASSWORD not set, skipping admin endpoints");
        return Ok(());
    };

    let mut credentials = AdminCredentials::new(password);
    if let Ok(mode) = std::env::var("ENGINE_ADMIN_MODE") {
        credentials = credentials.with_mode(mode.parse::<AuthMode>()?);
    }

    match client.admin_status(&credentials).await {
        Ok(response) => info!(endpoint = "admin_status", response = ?response),
        Err(e) => debug!(endpoint = "admin_status", error = %e),
    }

    match client.admin_stop_trading(&credentials).await {
        Ok(response) => info!(endpoint = "admin_stop_trading", response = ?response),
        Err(e) => debug!(endpoint = "admin_stop_trading", error = %e),
    }

    match client.admin_resume_trading(&credentials).await {
        Ok(response) => info!(endpoint = "admin_resume_trading", response = ?response),
        Err(e) => debug!(endpoint = "admin_resume_trading", error = %e),
    }

    Ok(())
}
