use log::info;

use crate::api::{ActionError, Event};
use crate::delivery::Delivery;
use crate::holding::{ItemId, ObjectKey};
use crate::math::sample_bounds;
use crate::model::{Chef, Counter, Universe};
use crate::timing::GameMode;
use crate::{occur, Game};

impl Game {
    pub(crate) fn dispense_plate(
        &mut self,
        chef: Chef,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let dispenser = counter
            .dispenser
            .ok_or(ActionError::CounterMisconfigured {
                counter: counter.id,
            })?;
        let plate = self.known.find_plate().ok_or(ActionError::PlateKindNotFound)?;
        let id = self.holding.items_id.introduce().one(ItemId);
        let dispense = self.plating.dispense_plate(dispenser)?;
        let spawn = self.holding.spawn_item(id, &plate, chef.holder)?;
        Ok(occur![dispense(), spawn()])
    }

    pub(crate) fn grab_object(
        &mut self,
        chef: Chef,
        object: ObjectKey,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.objects.get(object)?;
        let id = self.holding.items_id.introduce().one(ItemId);
        let spawn = self.holding.spawn_item(id, &kind, chef.holder)?;
        Ok(occur![spawn()])
    }

    pub(crate) fn trash_item(
        &mut self,
        chef: Chef,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let item = self.held_item(chef.holder)?;
        let destroy = self.holding.destroy_item(item)?;
        Ok(occur![
            destroy(),
            vec![Universe::ItemTrashed {
                counter: counter.id
            }],
        ])
    }

    /// Submits plate contents to waiting orders. Plate is consumed whatever the outcome.
    pub(crate) fn deliver_plate(&mut self, chef: Chef) -> Result<Vec<Event>, ActionError> {
        let plate = self.held_item(chef.holder)?;
        let ingredients = self.holding.get_item(plate)?.ingredient_keys();
        let destroy = self.holding.destroy_item(plate)?;
        let mut events: Vec<Event> = vec![];
        match self.delivery.find_matching_order(&ingredients) {
            Some(index) => {
                let recipe = self.delivery.orders[index].kind.clone();
                let complete = self.delivery.complete_order(index)?;
                events.push(complete().into());

                let bonus_time = self.config.session.bonus_time;
                let bonus = sample_bounds(bonus_time, "bonus time", &mut self.random);
                events.push(self.timing.add_time(bonus).into());

                if self.timing.mode == GameMode::Challenging {
                    let add_score = self.delivery.add_score(recipe.points)?;
                    let scoring = add_score();
                    let won = scoring
                        .iter()
                        .any(|event| matches!(event, Delivery::GameWon { .. }));
                    events.push(scoring.into());
                    if won {
                        events.push(self.timing.pause().into());
                    }
                }
                info!("Recipe {} delivered", recipe.name);
                events.push(vec![Delivery::DeliverySucceeded { recipe: recipe.id }].into());
            }
            None => {
                events.push(vec![Delivery::DeliveryFailed].into());
            }
        }
        events.push(destroy().into());
        Ok(events)
    }
}
