use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::actor_framework::EntityId;

/// One line of an order: a product reference with a quantity/price snapshot.
///
/// Neither `order_id` nor `product_id` is checked against the other
/// collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Decimal,
}

/// Payload for creating a new order item.
#[derive(Debug, Clone)]
pub struct OrderItemCreate {
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Decimal,
}
