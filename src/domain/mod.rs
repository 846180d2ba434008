pub mod product;
pub mod order;
pub mod order_item;

pub use product::*;
pub use order::*;
pub use order_item::*;
