use crate::collections::Shared;
use crate::delivery::Delivery::OrderSpawned;
use crate::delivery::{Delivery, DeliveryDomain, DeliveryError, Order, OrderId, RecipeKind};

impl DeliveryDomain {
    pub fn spawn_order(
        &mut self,
        id: OrderId,
        kind: &Shared<RecipeKind>,
    ) -> Result<impl FnOnce() -> Vec<Delivery> + '_, DeliveryError> {
        if self.orders.len() >= self.capacity {
            return Err(DeliveryError::OrdersQueueIsFull {
                capacity: self.capacity,
            });
        }
        let order = Order {
            id,
            kind: kind.clone(),
        };
        let command = move || {
            let events = vec![OrderSpawned {
                order: id,
                recipe: order.kind.id,
            }];
            self.orders_id.register(id.0);
            self.orders.push(order);
            events
        };
        Ok(command)
    }
}
