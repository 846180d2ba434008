use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::actor_framework::EntityId;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub in_stock: u32,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub in_stock: u32,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image_url: image_url.into(),
            in_stock: 0,
        }
    }

    pub fn in_stock(mut self, in_stock: u32) -> Self {
        self.in_stock = in_stock;
        self
    }
}
