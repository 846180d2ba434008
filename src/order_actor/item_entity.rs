use crate::actor_framework::{Entity, EntityId};
use crate::domain::{OrderItem, OrderItemCreate};

/// Filters understood by the order-item collection's `List` request.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderItemFilter {
    /// Items whose `order_id` equals the given order.
    Order(EntityId),
}

impl Entity for OrderItem {
    type CreateParams = OrderItemCreate;
    type Filter = OrderItemFilter;

    const NAME: &'static str = "order_item";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new OrderItem. References are stored as given.
    ///
    /// # Errors
    /// Rejects a zero quantity.
    fn from_create_params(id: EntityId, params: OrderItemCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err("quantity must be at least 1".to_string());
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            quantity: params.quantity,
            price: params.price,
        })
    }

    fn matches(&self, filter: &OrderItemFilter) -> bool {
        match filter {
            OrderItemFilter::Order(order_id) => self.order_id == *order_id,
        }
    }
}
