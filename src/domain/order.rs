use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor_framework::EntityId;

/// Status every order starts in. No transitions exist.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub total: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
///
/// `total` is trusted as given; the store never recomputes it.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub total: Decimal,
    /// Falls back to [`DEFAULT_ORDER_STATUS`] when absent.
    pub status: Option<String>,
}

/// A validated order submission, before anything is persisted.
///
/// Built through [`PlaceOrder::new`], so its total is always representable.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrder {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<LineItem>,
    total: Decimal,
}

/// One requested line of a [`PlaceOrder`].
///
/// `price` comes from the client and is not checked against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Decimal,
}

/// The sum of the line totals does not fit in a [`Decimal`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("order total is out of range")]
pub struct TotalOutOfRange;

/// Sum of `price * quantity` over `items`, without trailing zeros.
pub fn order_total(items: &[LineItem]) -> Result<Decimal, TotalOutOfRange> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| {
            item.price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| sum.checked_add(line))
        })
        .map(|total| total.normalize())
        .ok_or(TotalOutOfRange)
}

impl PlaceOrder {
    pub fn new(
        customer_name: String,
        phone: String,
        address: String,
        items: Vec<LineItem>,
    ) -> Result<Self, TotalOutOfRange> {
        let total = order_total(&items)?;
        Ok(Self {
            customer_name,
            phone,
            address,
            items,
            total,
        })
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Split into the order header payload and its line items.
    pub fn into_parts(self) -> (OrderCreate, Vec<LineItem>) {
        let order = OrderCreate {
            customer_name: self.customer_name,
            phone: self.phone,
            address: self.address,
            total: self.total,
            status: Some(DEFAULT_ORDER_STATUS.to_string()),
        };
        (order, self.items)
    }
}
