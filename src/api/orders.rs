//! Order intake endpoint.

use actix_web::{post, web};
use serde_json::Value;
use tracing::{info, instrument};

use crate::api::validation::parse_place_order;
use crate::api::{ApiError, ApiResult};
use crate::domain::{Order, OrderItemCreate, PlaceOrder};
use crate::storage::{Storage, StorageError};

/// `POST /api/orders`
///
/// Responds with the persisted order; its items are stored but not echoed.
#[post("/orders")]
#[instrument(skip(storage, body))]
pub async fn create_order(
    storage: web::Data<dyn Storage>,
    body: web::Json<Value>,
) -> ApiResult<web::Json<Order>> {
    let submission = parse_place_order(&body).map_err(|errors| {
        info!(%errors, "Rejected order submission");
        ApiError::Validation(errors.to_string())
    })?;

    let order = place_order(storage.get_ref(), submission)
        .await
        .map_err(|e| ApiError::internal("Failed to create order", e))?;
    Ok(web::Json(order))
}

/// Persist the order header, then each item in submission order.
///
/// There is no rollback: if an item fails, the order and the items before
/// it stay in the store.
pub async fn place_order(storage: &dyn Storage, submission: PlaceOrder) -> Result<Order, StorageError> {
    let (header, items) = submission.into_parts();
    let order = storage.create_order(header).await?;

    let item_count = items.len();
    for item in items {
        storage
            .add_order_item(OrderItemCreate {
                order_id: order.id,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
            })
            .await?;
    }

    info!(order_id = order.id, total = %order.total, item_count, "Order placed");
    Ok(order)
}
