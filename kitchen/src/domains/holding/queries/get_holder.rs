use crate::holding::{Holder, HolderId, HoldingDomain, HoldingError};

impl HoldingDomain {
    pub fn get_holder(&self, id: HolderId) -> Result<&Holder, HoldingError> {
        self.holders
            .get(&id)
            .ok_or(HoldingError::HolderNotFound { id })
    }

    pub fn is_empty(&self, id: HolderId) -> Result<bool, HoldingError> {
        Ok(self.get_holder(id)?.item.is_none())
    }
}
