use crate::api::{ActionError, Event};
use crate::holding::{HolderId, ItemId};
use crate::model::{Chef, Counter};
use crate::{occur, Game};

impl Game {
    pub(crate) fn held_item(&self, holder: HolderId) -> Result<ItemId, ActionError> {
        self.holding
            .get_holder(holder)?
            .item
            .ok_or(ActionError::HolderIsEmpty { holder })
    }

    pub(crate) fn place_item(
        &mut self,
        chef: Chef,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let item = self.held_item(chef.holder)?;
        match counter.stove {
            Some(stove) => {
                let kind = self.holding.get_item(item)?.kind.id;
                let frying = self
                    .known
                    .find_frying(kind)
                    .ok_or(ActionError::FryingNotFound)?;
                let burning = self.known.find_burning(frying.output);
                let attach = self.holding.attach_item(item, counter.holder)?;
                let start_frying = self.cooking.start_frying(stove, &frying, burning)?;
                Ok(occur![attach(), start_frying()])
            }
            None => {
                let attach = self.holding.attach_item(item, counter.holder)?;
                Ok(occur![attach()])
            }
        }
    }

    pub(crate) fn take_item(
        &mut self,
        chef: Chef,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let item = self.held_item(counter.holder)?;
        match counter.stove {
            Some(stove) => {
                let attach = self.holding.attach_item(item, chef.holder)?;
                let stop_cooking = self.cooking.stop_cooking(stove)?;
                Ok(occur![attach(), stop_cooking()])
            }
            None => {
                let attach = self.holding.attach_item(item, chef.holder)?;
                Ok(occur![attach()])
            }
        }
    }

    /// Consumes ingredient from one holder into plate lying in another.
    pub(crate) fn fill_plate(
        &mut self,
        ingredient_holder: HolderId,
        plate_holder: HolderId,
        counter: Counter,
    ) -> Result<Vec<Event>, ActionError> {
        let ingredient = self.held_item(ingredient_holder)?;
        let plate = self.held_item(plate_holder)?;
        let stop_cooking = match counter.stove {
            Some(stove) if ingredient_holder == counter.holder => {
                Some(self.cooking.stop_cooking(stove)?)
            }
            _ => None,
        };
        let put = self.holding.put_ingredient_on_plate(plate, ingredient)?;
        let mut events: Vec<Event> = occur![put()];
        if let Some(stop_cooking) = stop_cooking {
            events.push(stop_cooking().into());
        }
        Ok(events)
    }
}
