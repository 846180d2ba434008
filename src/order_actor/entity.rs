use chrono::Utc;

use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Order, OrderCreate, DEFAULT_ORDER_STATUS};

impl Entity for Order {
    type CreateParams = OrderCreate;
    type Filter = (); // No order queries for now

    const NAME: &'static str = "order";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// `created_at` is stamped here, inside the actor, so it follows the
    /// order in which IDs are handed out. The status defaults to "pending".
    fn from_create_params(id: EntityId, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            customer_name: params.customer_name,
            phone: params.phone,
            address: params.address,
            total: params.total,
            status: params
                .status
                .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string()),
            created_at: Utc::now(),
        })
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
