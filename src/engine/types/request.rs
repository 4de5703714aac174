use std::collections::HashMap;

use bon::Builder;
use serde::Serialize;

use super::{OrderType, Side};
use crate::types::{Decimal, JsonObject, Uuid, Value};

/// A trade instruction for `POST /order`.
///
/// The client serializes the order as-is; checking that it makes sense (a price on a limit
/// order, a positive quantity, a known symbol) is left to the engine.
///
/// # Example
///
/// ```
/// use purpletrader_client_sdk::engine::types::{Order, Side};
/// use purpletrader_client_sdk::types::dec;
///
/// let order = Order::builder()
///     .symbol("AAPL")
///     .side(Side::Buy)
///     .quantity(dec!(10))
///     .price(dec!(187.5))
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct Order {
    #[builder(into)]
    pub symbol: String,
    pub side: Side,
    #[builder(default)]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<Uuid>,
}

/// Body of `POST /order`: either a typed [`Order`] or a raw JSON object.
///
/// Both variants serialize to the same flat JSON object, so a raw map can carry fields the
/// typed [`Order`] does not know about.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderPayload {
    Typed(Order),
    Raw(JsonObject),
}

impl From<Order> for OrderPayload {
    fn from(order: Order) -> Self {
        OrderPayload::Typed(order)
    }
}

impl From<&Order> for OrderPayload {
    fn from(order: &Order) -> Self {
        OrderPayload::Typed(order.clone())
    }
}

impl From<JsonObject> for OrderPayload {
    fn from(object: JsonObject) -> Self {
        OrderPayload::Raw(object)
    }
}

impl From<HashMap<String, Value>> for OrderPayload {
    fn from(map: HashMap<String, Value>) -> Self {
        OrderPayload::Raw(map.into_iter().collect())
    }
}
