//! The store contract handlers depend on, and its actor-backed implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::actor_framework::EntityId;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, OrderCreate, OrderItem, OrderItemCreate, Product};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Failure inside the store. Never shown to HTTP clients verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Catalog reads plus order writes.
///
/// Absence is `Ok(None)` or an empty vector; errors are reserved for the
/// store itself failing.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StorageError>;

    /// Exact, case-sensitive match on `category`.
    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, StorageError>;

    async fn get_product(&self, id: EntityId) -> Result<Option<Product>, StorageError>;

    async fn create_order(&self, order: OrderCreate) -> Result<Order, StorageError>;

    async fn add_order_item(&self, item: OrderItemCreate) -> Result<OrderItem, StorageError>;

    async fn get_order(&self, id: EntityId) -> Result<Option<Order>, StorageError>;

    async fn list_order_items(&self, order_id: EntityId) -> Result<Vec<OrderItem>, StorageError>;
}

/// [`Storage`] served by the product, order and order-item actors.
#[derive(Clone, Debug)]
pub struct ActorStorage {
    products: ProductClient,
    orders: OrderClient,
}

impl ActorStorage {
    pub fn new(products: ProductClient, orders: OrderClient) -> Self {
        Self { products, orders }
    }
}

#[async_trait]
impl Storage for ActorStorage {
    async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.products.list_products().await?)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, StorageError> {
        Ok(self
            .products
            .list_products_by_category(category.to_string())
            .await?)
    }

    async fn get_product(&self, id: EntityId) -> Result<Option<Product>, StorageError> {
        Ok(self.products.get_product(id).await?)
    }

    async fn create_order(&self, order: OrderCreate) -> Result<Order, StorageError> {
        Ok(self.orders.create_order(order).await?)
    }

    async fn add_order_item(&self, item: OrderItemCreate) -> Result<OrderItem, StorageError> {
        Ok(self.orders.add_order_item(item).await?)
    }

    async fn get_order(&self, id: EntityId) -> Result<Option<Order>, StorageError> {
        Ok(self.orders.get_order(id).await?)
    }

    async fn list_order_items(&self, order_id: EntityId) -> Result<Vec<OrderItem>, StorageError> {
        Ok(self.orders.list_order_items(order_id).await?)
    }
}
