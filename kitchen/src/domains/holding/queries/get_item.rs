use crate::holding::{HolderId, HoldingDomain, HoldingError, Item, ItemId};

impl HoldingDomain {
    pub fn get_item(&self, id: ItemId) -> Result<&Item, HoldingError> {
        self.items.get(&id).ok_or(HoldingError::ItemNotFound { id })
    }

    pub(crate) fn get_item_mut(&mut self, id: ItemId) -> Result<&mut Item, HoldingError> {
        self.items
            .get_mut(&id)
            .ok_or(HoldingError::ItemNotFound { id })
    }

    pub fn get_holder_item(&self, holder: HolderId) -> Result<Option<&Item>, HoldingError> {
        match self.get_holder(holder)?.item {
            Some(item) => self.get_item(item).map(Some),
            None => Ok(None),
        }
    }
}
