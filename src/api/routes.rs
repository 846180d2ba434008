use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest};
use tracing::debug;

use super::orders::create_order;
use super::products::{get_product, list_products, list_products_by_category};
use super::ApiError;

/// Register the `/api` scope. Expects `web::Data<dyn Storage>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .service(list_products)
            .service(list_products_by_category)
            .service(get_product)
            .service(create_order),
    );
}

/// Unreadable JSON bodies get the same `{"message": ...}` 400 as schema failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "Rejected request body");
        ApiError::Validation(err.to_string()).into()
    })
}

/// Unparseable path segments, such as `/api/products/abc`, answer in JSON too.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        debug!(error = %err, "Rejected request path");
        ApiError::Validation(err.to_string()).into()
    })
}
