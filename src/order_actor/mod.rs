//! Order and order-item entities.

pub mod entity;
pub mod error;
pub mod item_entity;

pub use error::*;
pub use item_entity::*;
