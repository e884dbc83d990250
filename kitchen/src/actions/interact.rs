use crate::api::{ActionError, Event};
use crate::holding::HolderId;
use crate::model::{Capability, Counter};
use crate::rules::{decide_interaction, Grip, Interaction, Surface};
use crate::timing::GamePhase;
use crate::{occur, Game};

impl Game {
    pub fn grip_of(&self, holder: HolderId) -> Result<Grip, ActionError> {
        let grip = match self.holding.get_holder_item(holder)? {
            None => Grip::Empty,
            Some(item) if item.is_plate() => Grip::Plate(item.ingredient_keys()),
            Some(item) => Grip::Ingredient(item.kind.id),
        };
        Ok(grip)
    }

    pub fn surface_of(&self, counter: &Counter) -> Result<Surface, ActionError> {
        let kind = self.known.counters.get(counter.key)?;
        let surface = match kind.capability {
            Capability::Clear => Surface::Clear,
            Capability::Cutting => Surface::Cutting,
            Capability::Stove => Surface::Stove,
            Capability::Plates => {
                let id = counter
                    .dispenser
                    .ok_or(ActionError::CounterMisconfigured {
                        counter: counter.id,
                    })?;
                let dispenser = self.plating.get_dispenser(id)?;
                Surface::Plates {
                    supply: dispenser.supply,
                    capacity: dispenser.capacity,
                }
            }
            Capability::Delivery => Surface::Delivery,
            Capability::Trash => Surface::Trash,
            Capability::Container { object } => Surface::Container { object },
        };
        Ok(surface)
    }

    pub(crate) fn interact(&mut self) -> Result<Vec<Event>, ActionError> {
        if self.timing.phase == GamePhase::WaitingToStart {
            let start = self.timing.start_countdown()?;
            return Ok(occur![start()]);
        }
        if self.timing.paused || !self.timing.is_playing() {
            return Ok(vec![]);
        }
        let chef = self.universe.get_chef()?;
        let counter = match chef.selected {
            Some(counter) => self.universe.get_counter(counter)?,
            None => return Ok(vec![]),
        };
        let surface = self.surface_of(&counter)?;
        let actor = self.grip_of(chef.holder)?;
        let target = self.grip_of(counter.holder)?;
        match decide_interaction(&self.known, &surface, &actor, &target) {
            Interaction::Nothing => Ok(vec![]),
            Interaction::Place => self.place_item(chef, counter),
            Interaction::Take => self.take_item(chef, counter),
            Interaction::FillActorPlate => self.fill_plate(counter.holder, chef.holder, counter),
            Interaction::FillSurfacePlate => self.fill_plate(chef.holder, counter.holder, counter),
            Interaction::DispensePlate => self.dispense_plate(chef, counter),
            Interaction::Deliver => self.deliver_plate(chef),
            Interaction::Trash => self.trash_item(chef, counter),
            Interaction::Grab { object } => self.grab_object(chef, object),
            Interaction::Cut | Interaction::ReturnPlate => Ok(vec![]),
        }
    }
}
