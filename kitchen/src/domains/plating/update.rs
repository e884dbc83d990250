use crate::plating::Plating::PlateStocked;
use crate::plating::{Plating, PlatingDomain};

impl PlatingDomain {
    pub fn update(&mut self, time: f32, playing: bool) -> Vec<Plating> {
        let mut events = vec![];
        for dispenser in self.dispensers.iter_mut() {
            dispenser.timer += time;
            if dispenser.timer >= dispenser.interval {
                dispenser.timer = 0.0;
                if playing && dispenser.supply < dispenser.capacity {
                    dispenser.supply += 1;
                    events.push(PlateStocked {
                        dispenser: dispenser.id,
                        supply: dispenser.supply,
                    });
                }
            }
        }
        events
    }
}
