use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::SystemError;
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, OrderItem, Product};
use crate::product_actor::sample_products;
use crate::storage::{ActorStorage, Storage};

/// Owns the store actors: starts them, hands out clients, shuts them down.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Start the product, order and order-item actors.
    ///
    /// The catalog is seeded before the product actor is spawned, so the
    /// first request already sees products 1..N.
    #[instrument(name = "store_system")]
    pub fn new(channel_capacity: usize) -> Result<Self, SystemError> {
        info!("Starting store system");

        let (mut product_actor, products) = ResourceActor::<Product>::new(channel_capacity);
        product_actor.seed(sample_products())?;
        let (order_actor, orders) = ResourceActor::<Order>::new(channel_capacity);
        let (item_actor, items) = ResourceActor::<OrderItem>::new(channel_capacity);

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(item_actor.run()),
        ];

        info!("Store system started");

        Ok(Self {
            product_client: ProductClient::new(products),
            order_client: OrderClient::new(orders, items),
            handles,
        })
    }

    /// A [`Storage`] handle sharing this system's actors.
    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::new(ActorStorage::new(
            self.product_client.clone(),
            self.order_client.clone(),
        ))
    }

    /// Stop every actor and wait for its task to finish.
    ///
    /// Outstanding clients held elsewhere get `ActorClosed` afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down store system");

        if let Err(e) = self.order_client.shutdown().await {
            warn!(error = %e, "Order actors already stopped");
        }
        if let Err(e) = self.product_client.shutdown().await {
            warn!(error = %e, "Product actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor shutdown error");
                return Err(e.into());
            }
        }

        info!("Store system shutdown complete");
        Ok(())
    }
}
