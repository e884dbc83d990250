use crate::api::{ActionError, Event};
use crate::math::{cast_ray, sweep_move, Position, VectorMath};
use crate::model::{CounterId, Universe, UniverseError};
use crate::Game;

impl Game {
    pub(crate) fn move_chef(&mut self, direction: Position) -> Result<Vec<Event>, ActionError> {
        let chef = self
            .universe
            .chef
            .as_mut()
            .ok_or(UniverseError::ChefNotFound)?;
        chef.input = direction;
        Ok(vec![])
    }

    /// First counter in front of position, walls block selection.
    pub fn select_counter(&self, position: Position, facing: Position) -> Option<CounterId> {
        let distance = self.config.chef.interact_distance;
        for cell in cast_ray(position, facing, distance) {
            if let Some(counter) = self.universe.get_counter_at(cell) {
                return Some(counter.id);
            }
            if self.universe.is_occupied(cell) {
                return None;
            }
        }
        None
    }

    pub(crate) fn update_chef(&mut self, time: f32) -> Vec<Universe> {
        let mut events = vec![];
        let mut chef = match self.universe.chef {
            Some(chef) => chef,
            None => return events,
        };
        if !chef.input.is_zero() {
            let settings = &self.config.chef;
            let bounds = [settings.radius * 2.0, settings.radius * 2.0];
            let distance = settings.speed * time;
            if let Some(destination) =
                sweep_move(&self.universe.sweep, chef.position, bounds, chef.input, distance)
            {
                chef.position = destination;
            }
            chef.facing = chef.input.normalize();
            events.push(Universe::ChefMoved {
                position: chef.position,
                facing: chef.facing,
            });
        }
        let selected = self.select_counter(chef.position, chef.facing);
        if selected != chef.selected {
            chef.selected = selected;
            events.push(Universe::CounterSelected { counter: selected });
        }
        self.universe.chef = Some(chef);
        events
    }
}
