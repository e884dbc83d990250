use crate::holding::Holding::ItemDestroyed;
use crate::holding::{Holding, HoldingDomain, HoldingError, ItemId};

impl HoldingDomain {
    pub fn destroy_item(
        &mut self,
        item: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        let holder = self.get_item(item)?.holder;
        let command = move || {
            self.unlink(item);
            self.items.remove(&item);
            vec![ItemDestroyed { item, holder }]
        };
        Ok(command)
    }
}
