use crate::collections::Shared;
use crate::delivery::{DeliveryDomain, RecipeKind};

impl DeliveryDomain {
    pub fn load_catalog(
        &mut self,
        recipes: Vec<Shared<RecipeKind>>,
        capacity: usize,
        interval: f32,
    ) {
        self.catalog = recipes;
        self.capacity = capacity;
        self.spawn_interval = interval;
        self.spawn_timer = interval;
    }
}
