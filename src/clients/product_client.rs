use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::Product;
use crate::product_actor::{ProductError, ProductFilter};

/// Client for interacting with the Product actor.
#[derive(Clone, Debug)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list(None).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_products_by_category(
        &self,
        category: String,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let filter = ProductFilter::Category(category);
        Ok(self.inner.list(Some(filter)).await?)
    }

    pub async fn shutdown(&self) -> Result<(), ProductError> {
        Ok(self.inner.shutdown().await?)
    }
}
