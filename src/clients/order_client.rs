use tracing::{debug, instrument};

use crate::actor_framework::{EntityId, ResourceClient};
use crate::domain::{Order, OrderCreate, OrderItem, OrderItemCreate};
use crate::order_actor::{OrderError, OrderItemFilter};

/// Client for interacting with the Order and OrderItem actors.
///
/// The two collections are separate actors; this client only routes
/// requests and never joins them.
#[derive(Clone, Debug)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    items: ResourceClient<OrderItem>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, items: ResourceClient<OrderItem>) -> Self {
        Self { inner, items }
    }

    #[instrument(fields(customer = %order.customer_name, total = %order.total), skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.create(order).await?)
    }

    #[instrument(fields(order_id = item.order_id, product_id = item.product_id), skip(self, item))]
    pub async fn add_order_item(&self, item: OrderItemCreate) -> Result<OrderItem, OrderError> {
        debug!("Sending request");
        Ok(self.items.create(item).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_order_items(&self, order_id: EntityId) -> Result<Vec<OrderItem>, OrderError> {
        debug!("Sending request");
        let filter = OrderItemFilter::Order(order_id);
        Ok(self.items.list(Some(filter)).await?)
    }

    /// Stop both actors. The item actor is told to stop even when the
    /// order actor is already gone.
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        let orders = self.inner.shutdown().await;
        let items = self.items.shutdown().await;
        orders?;
        items?;
        Ok(())
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{FrameworkError, ResourceRequest};
    use crate::mock_framework::{create_mock_client, expect_create, expect_list};
    use rust_decimal::Decimal;

    fn mock_order_client() -> (
        OrderClient,
        tokio::sync::mpsc::Receiver<ResourceRequest<Order>>,
        tokio::sync::mpsc::Receiver<ResourceRequest<OrderItem>>,
    ) {
        let (orders, order_rx) = create_mock_client::<Order>(10);
        let (items, item_rx) = create_mock_client::<OrderItem>(10);
        (OrderClient::new(orders, items), order_rx, item_rx)
    }

    #[tokio::test]
    async fn test_add_order_item_routes_to_item_actor() {
        let (client, _order_rx, mut item_rx) = mock_order_client();

        let task = tokio::spawn(async move {
            client
                .add_order_item(OrderItemCreate {
                    order_id: 4,
                    product_id: 2,
                    quantity: 3,
                    price: Decimal::from(5),
                })
                .await
        });

        let (params, responder) = expect_create(&mut item_rx)
            .await
            .expect("Expected OrderItem Create");
        assert_eq!(params.order_id, 4);
        assert_eq!(params.quantity, 3);
        responder
            .send(Err(FrameworkError::Rejected("nope".to_string())))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(OrderError::ValidationError("nope".to_string())));
    }

    #[tokio::test]
    async fn test_list_order_items_filters_by_order() {
        let (client, _order_rx, mut item_rx) = mock_order_client();

        let task = tokio::spawn(async move { client.list_order_items(7).await });

        let (filter, responder) = expect_list(&mut item_rx)
            .await
            .expect("Expected OrderItem List");
        assert_eq!(filter, Some(OrderItemFilter::Order(7)));
        responder.send(Ok(vec![])).unwrap();

        assert_eq!(task.await.unwrap(), Ok(vec![]));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (client, order_rx, _item_rx) = mock_order_client();
        drop(order_rx);

        let result = client.get_order(1).await;
        assert_eq!(
            result,
            Err(OrderError::ActorCommunicationError(FrameworkError::ActorClosed))
        );
    }

    #[tokio::test]
    async fn test_shutdown_reaches_items_when_orders_are_gone() {
        let (client, order_rx, mut item_rx) = mock_order_client();
        drop(order_rx);

        let result = client.shutdown().await;
        assert_eq!(
            result,
            Err(OrderError::ActorCommunicationError(FrameworkError::ActorClosed))
        );
        assert!(matches!(item_rx.recv().await, Some(ResourceRequest::Shutdown)));
    }
}
