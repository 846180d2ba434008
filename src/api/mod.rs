//! HTTP adapter: routes, request validation and error mapping.
//!
//! ```text
//! GET  /api/products
//! GET  /api/products/category/{category}
//! GET  /api/products/{id}
//! POST /api/orders
//! ```

pub mod error;
pub mod orders;
pub mod products;
pub mod routes;
pub mod validation;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::configure;
