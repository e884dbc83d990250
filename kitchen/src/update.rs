use log::error;

use crate::api::{ActionError, Event};
use crate::cooking::{Cooking, StoveId};
use crate::holding::{ItemId, ObjectKey};
use crate::Game;

fn publish<T>(events: &mut Vec<Event>, domain_events: Vec<T>)
where
    Vec<T>: Into<Event>,
{
    if !domain_events.is_empty() {
        events.push(domain_events.into());
    }
}

impl Game {
    pub fn update(&mut self, real_seconds: f32) -> Vec<Event> {
        let mut events = vec![];
        if self.timing.paused {
            return events;
        }
        let time = real_seconds;
        publish(&mut events, self.timing.update(time));
        let playing = self.timing.is_playing();
        publish(&mut events, self.update_chef(time));

        let cooking_events = self.cooking.update(time);
        let mut transformations = vec![];
        for event in &cooking_events {
            match event {
                Cooking::FryingCompleted { stove, output }
                | Cooking::BurningCompleted { stove, output } => {
                    transformations.push((*stove, *output))
                }
                _ => {}
            }
        }
        publish(&mut events, cooking_events);
        for (stove, output) in transformations {
            match self.transform_stove_item(stove, output) {
                Ok(transformation) => events.extend(transformation),
                Err(error) => error!("Unable to transform {:?} item, {:?}", stove, error),
            }
        }

        publish(
            &mut events,
            self.delivery.update(time, playing, &mut self.random),
        );
        publish(&mut events, self.plating.update(time, playing));
        events
    }

    /// Swaps item cooked on stove to its output kind.
    fn transform_stove_item(
        &mut self,
        stove: StoveId,
        output: ObjectKey,
    ) -> Result<Vec<Event>, ActionError> {
        let counter = self.universe.get_counter_by_stove(stove)?;
        let item = self.held_item(counter.holder)?;
        let kind = self.known.objects.get(output)?;
        let replacement = self.holding.items_id.introduce().one(ItemId);
        let replace = self.holding.replace_item(item, replacement, &kind)?;
        Ok(vec![replace().into()])
    }
}
