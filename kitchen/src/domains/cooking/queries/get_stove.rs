use crate::cooking::{CookingDomain, CookingError, Stove, StoveId};

impl CookingDomain {
    pub fn get_stove_mut(&mut self, id: StoveId) -> Result<&mut Stove, CookingError> {
        self.stoves
            .iter_mut()
            .find(|stove| stove.id == id)
            .ok_or(CookingError::StoveNotFound { id })
    }

    pub fn get_stove(&self, id: StoveId) -> Result<&Stove, CookingError> {
        self.stoves
            .iter()
            .find(|stove| stove.id == id)
            .ok_or(CookingError::StoveNotFound { id })
    }
}
