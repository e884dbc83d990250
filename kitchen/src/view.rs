use crate::api::Event;
use crate::holding::Holding;
use crate::model::{Counter, Universe};
use crate::Game;

impl Game {
    pub fn look_at_counter(&self, entity: Counter) -> Universe {
        Universe::CounterAppeared { entity }
    }

    /// Snapshot of whole kitchen for late subscribers.
    pub fn look_around(&self) -> Vec<Event> {
        let mut universe = vec![];
        for wall in &self.universe.walls {
            universe.push(Universe::WallAppeared { entity: *wall });
        }
        for counter in &self.universe.counters {
            universe.push(self.look_at_counter(*counter));
        }
        if let Some(chef) = self.universe.chef {
            universe.push(Universe::ChefAppeared { entity: chef });
        }
        let mut items: Vec<_> = self.holding.items.values().collect();
        items.sort_by_key(|item| item.id);
        let holding: Vec<Holding> = items
            .into_iter()
            .map(|item| Holding::ItemSpawned {
                item: item.id,
                kind: item.kind.id,
                holder: item.holder,
            })
            .collect();
        vec![universe.into(), holding.into()]
    }
}
