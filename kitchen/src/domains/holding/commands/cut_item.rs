use crate::holding::Holding::ItemCut;
use crate::holding::{Holding, HoldingDomain, HoldingError, ItemId};

impl HoldingDomain {
    pub fn cut_item(
        &mut self,
        item: ItemId,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        let target = self.get_item_mut(item)?;
        let command = move || {
            target.cuts = target.cuts.saturating_add(1);
            vec![ItemCut {
                item,
                cuts: target.cuts,
            }]
        };
        Ok(command)
    }
}
