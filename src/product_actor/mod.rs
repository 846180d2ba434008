//! Product catalog entity, its list filter, and the startup fixture.

pub mod entity;
pub mod error;
pub mod seed;

pub use entity::*;
pub use error::*;
pub use seed::*;
