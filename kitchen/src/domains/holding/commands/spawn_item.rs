use crate::collections::Shared;
use crate::holding::Holding::ItemSpawned;
use crate::holding::{HolderId, Holding, HoldingDomain, HoldingError, Item, ItemId, ObjectKind};
use log::error;

impl HoldingDomain {
    /// Creates new item directly inside empty holder.
    pub fn spawn_item(
        &mut self,
        id: ItemId,
        kind: &Shared<ObjectKind>,
        holder: HolderId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        if let Some(occupant) = self.get_holder(holder)?.item {
            error!(
                "Unable to spawn {} into {:?}, already holds {:?}",
                kind.name, holder, occupant
            );
            return Err(HoldingError::HolderIsOccupied {
                holder,
                item: occupant,
            });
        }
        let item = Item {
            id,
            kind: kind.clone(),
            holder,
            cuts: 0,
            ingredients: vec![],
        };
        let command = move || {
            let events = vec![ItemSpawned {
                item: id,
                kind: item.kind.id,
                holder,
            }];
            self.items_id.register(id.0);
            self.items.insert(id, item);
            self.link(id, holder);
            events
        };
        Ok(command)
    }
}
