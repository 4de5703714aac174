//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Arbitrary precision decimal type for order prices and quantities.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use purpletrader_client_sdk::types::dec;
/// let price = dec!(101.25);
/// ```
pub use rust_decimal_macros::dec;
/// Arbitrary JSON value carried inside engine responses and raw order payloads.
pub use serde_json::Value;
/// UUID type used for client-assigned order identifiers.
pub use uuid::Uuid;

/// A JSON object as returned by every engine endpoint.
///
/// Successful responses are handed back verbatim. When the engine answers with a body that is
/// not a JSON object, the text is wrapped as `{"raw": <body>}`.
pub type JsonObject = serde_json::Map<String, Value>;
