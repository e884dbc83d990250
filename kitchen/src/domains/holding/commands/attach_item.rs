use crate::holding::Holding::{ItemPickedUp, ItemPlaced};
use crate::holding::{HolderId, HolderRole, Holding, HoldingDomain, HoldingError, ItemId};
use log::error;

impl HoldingDomain {
    /// Moves item to destination holder, releasing previous one.
    pub fn attach_item(
        &mut self,
        item: ItemId,
        destination: HolderId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        self.get_item(item)?;
        let holder = self.get_holder(destination)?;
        if let Some(occupant) = holder.item {
            error!(
                "Unable to attach {:?} to {:?}, already holds {:?}",
                item, destination, occupant
            );
            return Err(HoldingError::HolderIsOccupied {
                holder: destination,
                item: occupant,
            });
        }
        let role = holder.role;
        let command = move || {
            self.unlink(item);
            self.link(item, destination);
            let event = match role {
                HolderRole::Counter => ItemPlaced {
                    item,
                    holder: destination,
                },
                HolderRole::Chef => ItemPickedUp {
                    item,
                    holder: destination,
                },
            };
            vec![event]
        };
        Ok(command)
    }
}
