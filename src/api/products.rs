//! Catalog read endpoints.

use actix_web::{get, web};
use tracing::{debug, instrument};

use crate::actor_framework::EntityId;
use crate::api::{ApiError, ApiResult};
use crate::domain::Product;
use crate::storage::Storage;

/// `GET /api/products`
#[get("/products")]
#[instrument(skip(storage))]
pub async fn list_products(storage: web::Data<dyn Storage>) -> ApiResult<web::Json<Vec<Product>>> {
    let products = storage
        .list_products()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch products", e))?;
    debug!(count = products.len(), "Listed products");
    Ok(web::Json(products))
}

/// `GET /api/products/category/{category}`
///
/// An unknown category is an empty list, not an error.
#[get("/products/category/{category}")]
#[instrument(skip(storage))]
pub async fn list_products_by_category(
    storage: web::Data<dyn Storage>,
    category: web::Path<String>,
) -> ApiResult<web::Json<Vec<Product>>> {
    let products = storage
        .list_products_by_category(&category)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch products by category", e))?;
    debug!(count = products.len(), "Listed products by category");
    Ok(web::Json(products))
}

/// `GET /api/products/{id}`
#[get("/products/{id}")]
#[instrument(skip(storage))]
pub async fn get_product(
    storage: web::Data<dyn Storage>,
    id: web::Path<EntityId>,
) -> ApiResult<web::Json<Product>> {
    storage
        .get_product(id.into_inner())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch product", e))?
        .map(web::Json)
        .ok_or(ApiError::NotFound("Product not found"))
}
