use crate::holding::Holding::{ItemDetached, ItemPickedUp, ItemPlaced};
use crate::holding::{HolderId, HolderRole, Holding, HoldingDomain, HoldingError, Item, ItemId};
use log::error;

impl HoldingDomain {
    /// Detaches item from its holder and takes it out of the world.
    pub fn extract_item(
        &mut self,
        item: ItemId,
    ) -> Result<impl FnOnce() -> (Option<Item>, Vec<Holding>) + '_, HoldingError> {
        let holder = self.get_item(item)?.holder;
        let command = move || {
            self.unlink(item);
            let extracted = self.items.remove(&item);
            (extracted, vec![ItemDetached { item, holder }])
        };
        Ok(command)
    }

    /// Returns previously extracted item into the world.
    pub fn insert_item(
        &mut self,
        item: Item,
        holder: HolderId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        let destination = self.get_holder(holder)?;
        if let Some(occupant) = destination.item {
            error!(
                "Unable to insert {:?} to {:?}, already holds {:?}",
                item.id, holder, occupant
            );
            return Err(HoldingError::HolderIsOccupied {
                holder,
                item: occupant,
            });
        }
        let role = destination.role;
        let command = move || {
            let id = item.id;
            self.items_id.register(id.0);
            self.items.insert(id, item);
            self.link(id, holder);
            let event = match role {
                HolderRole::Counter => ItemPlaced { item: id, holder },
                HolderRole::Chef => ItemPickedUp { item: id, holder },
            };
            vec![event]
        };
        Ok(command)
    }
}
