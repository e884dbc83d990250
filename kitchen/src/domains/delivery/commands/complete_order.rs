use crate::delivery::Delivery::OrderCompleted;
use crate::delivery::{Delivery, DeliveryDomain, DeliveryError};

impl DeliveryDomain {
    pub fn complete_order(
        &mut self,
        index: usize,
    ) -> Result<impl FnOnce() -> Vec<Delivery> + '_, DeliveryError> {
        if index >= self.orders.len() {
            return Err(DeliveryError::OrderNotFound { index });
        }
        let command = move || {
            let order = self.orders.remove(index);
            self.successful += 1;
            vec![OrderCompleted {
                order: order.id,
                recipe: order.kind.id,
            }]
        };
        Ok(command)
    }
}
