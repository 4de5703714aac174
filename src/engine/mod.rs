//! Trading engine API client and types.
//!
//! The engine exposes a small JSON-over-HTTP API for order entry, market statistics, and
//! password-gated administration. The [`Client`] maps each endpoint to one async method and
//! hands responses back as [`JsonObject`](crate::types::JsonObject)s without interpreting them.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/order` | POST | Submit an order |
//! | `/api/v1/orderbook/{symbol}` | GET | Order book for a symbol |
//! | `/api/v1/stats/{symbol}` | GET | Trading statistics for a symbol |
//! | `/api/v1/stats/{symbol}/{timeframe}` | GET | Statistics for a symbol over one timeframe |
//! | `/api/v1/stats/all` | GET | Statistics for every symbol |
//! | `/api/v1/stats/summary` | GET | Engine-wide statistics summary |
//! | `/api/v1/leaderboard` | GET | Trader leaderboard |
//! | `/health` | GET | Health check |
//! | `/admin/status` | GET | Admin status (password required) |
//! | `/admin/stop_trading` | POST | Halt matching (password required) |
//! | `/admin/resume_trading` | POST | Resume matching (password required) |
//! | `/admin/flush_system` | POST | Flush engine state (password required) |
//!
//! See [`crate::auth`] for how the admin password is delivered.
//!
//! # Errors
//!
//! Responses with a status of 400 or above become [`Kind::Status`](crate::error::Kind::Status)
//! errors whose [`Status`](crate::error::Status) carries the engine's `error` message and the raw
//! body. Connection failures and timeouts are [`Kind::Transport`](crate::error::Kind::Transport).
//!
//! # Example
//!
//! ```no_run
//! use purpletrader_client_sdk::engine::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("http://localhost:8080", Config::default())?;
//!
//! let book = client.get_orderbook("AAPL").await?;
//! let leaderboard = client.get_leaderboard().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, Config};
