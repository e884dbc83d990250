use crate::delivery::Delivery::OrderSpawned;
use crate::delivery::{Delivery, DeliveryDomain, Order, OrderId};
use rand::seq::SliceRandom;
use rand::Rng;

impl DeliveryDomain {
    /// Spawns random order every interval while playing and below capacity.
    pub fn update(&mut self, time: f32, playing: bool, random: &mut impl Rng) -> Vec<Delivery> {
        let mut events = vec![];
        self.spawn_timer -= time;
        if self.spawn_timer <= 0.0 {
            self.spawn_timer = self.spawn_interval;
            if playing && self.orders.len() < self.capacity {
                if let Some(kind) = self.catalog.choose(random).cloned() {
                    let id = self.orders_id.one(OrderId);
                    events.push(OrderSpawned {
                        order: id,
                        recipe: kind.id,
                    });
                    self.orders.push(Order { id, kind });
                }
            }
        }
        events
    }
}
