use crate::collections::Shared;
use crate::holding::Holding::{ItemDestroyed, ItemSpawned};
use crate::holding::{Holding, HoldingDomain, HoldingError, Item, ItemId, ObjectKind};

impl HoldingDomain {
    /// Destroys item and spawns replacement of another kind in the same holder.
    pub fn replace_item(
        &mut self,
        item: ItemId,
        replacement: ItemId,
        kind: &Shared<ObjectKind>,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        let holder = self.get_item(item)?.holder;
        let replacement_item = Item {
            id: replacement,
            kind: kind.clone(),
            holder,
            cuts: 0,
            ingredients: vec![],
        };
        let command = move || {
            let events = vec![
                ItemDestroyed { item, holder },
                ItemSpawned {
                    item: replacement,
                    kind: replacement_item.kind.id,
                    holder,
                },
            ];
            self.unlink(item);
            self.items.remove(&item);
            self.items_id.register(replacement.0);
            self.items.insert(replacement, replacement_item);
            self.link(replacement, holder);
            events
        };
        Ok(command)
    }
}
