use serde::{Deserialize, Serialize};

pub mod request;

pub use request::{Order, OrderPayload};

/// The side of an order.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    #[serde(alias = "BUY")]
    Buy,
    #[serde(alias = "SELL")]
    Sell,
}

/// How the engine should execute an order.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderType {
    /// Rests on the book at `price` until filled or cancelled.
    #[default]
    Limit,
    /// Fills immediately against the book; `price` is ignored.
    Market,
}

/// Bucket granularity for [`crate::engine::Client::get_stats_timeframe`].
///
/// Any `&str` or `String` with the same spelling is accepted in its place, so timeframes the
/// engine adds later can be requested without an SDK update.
#[non_exhaustive]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    #[strum(serialize = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    #[strum(serialize = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    #[strum(serialize = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    #[strum(serialize = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    #[strum(serialize = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    #[strum(serialize = "1w")]
    OneWeek,
}
