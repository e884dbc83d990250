use crate::holding::Holding::HolderCreated;
use crate::holding::{Holder, HolderId, HolderRole, Holding, HoldingDomain, HoldingError};
use crate::math::Position;

impl HoldingDomain {
    pub fn create_holder(
        &mut self,
        id: HolderId,
        role: HolderRole,
        anchor: Position,
    ) -> Result<impl FnOnce() -> Vec<Holding> + '_, HoldingError> {
        if self.holders.contains_key(&id) {
            return Err(HoldingError::HolderAlreadyExists { id });
        }
        let holder = Holder {
            id,
            role,
            anchor,
            item: None,
        };
        let command = move || {
            self.holders_id.register(id.0);
            self.holders.insert(id, holder);
            vec![HolderCreated { holder: id, role }]
        };
        Ok(command)
    }
}
