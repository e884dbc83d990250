use crate::api::{ActionError, Event};
use crate::holding::ItemId;
use crate::model::{Chef, Counter, Universe};
use crate::rules::{decide_alternate_interaction, Interaction};
use crate::{occur, Game};

impl Game {
    pub(crate) fn interact_alternate(&mut self) -> Result<Vec<Event>, ActionError> {
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
        match decide_alternate_interaction(&self.known, &surface, &actor, &target) {
            Interaction::Cut => self.cut_item(counter),
            Interaction::ReturnPlate => self.return_plate(chef, counter),
            _ => Ok(vec![]),
        }
    }

    pub(crate) fn cut_item(&mut self, counter: Counter) -> Result<Vec<Event>, ActionError> {
        let item = self.held_item(counter.holder)?;
        let (kind, cuts) = {
            let item = self.holding.get_item(item)?;
            (item.kind.id, item.cuts)
        };
        let cutting = self
            .known
            .find_cutting(kind)
            .ok_or(ActionError::CuttingNotFound)?;
        let output = self.known.objects.get(cutting.output)?;
        let cut = self.holding.cut_item(item)?;
        let mut events: Vec<Event> = occur![
            cut(),
            vec![Universe::AnyCut {
                counter: counter.id
            }],
        ];
        if cuts.saturating_add(1) >= cutting.cuts {
            let replacement = self.holding.items_id.introduce().one(ItemId);
            let replace = self.holding.replace_item(item, replacement, &output)?;
            events.push(replace().into());
        }
        Ok(events)
    }

    pub(crate) fn return_plate(
        &mut self,
        chef: Chef,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let dispenser = counter
            .dispenser
            .ok_or(ActionError::CounterMisconfigured {
                counter: counter.id,
            })?;
        let plate = self.held_item(chef.holder)?;
        let destroy = self.holding.destroy_item(plate)?;
        let return_plate = self.plating.return_plate(dispenser)?;
        Ok(occur![destroy(), return_plate()])
    }
}
