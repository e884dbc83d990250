use crate::plating::{Dispenser, DispenserId, PlatingDomain, PlatingError};

impl PlatingDomain {
    pub fn get_dispenser_mut(&mut self, id: DispenserId) -> Result<&mut Dispenser, PlatingError> {
        self.dispensers
            .iter_mut()
            .find(|dispenser| dispenser.id == id)
            .ok_or(PlatingError::DispenserNotFound { id })
    }

    pub fn get_dispenser(&self, id: DispenserId) -> Result<&Dispenser, PlatingError> {
        self.dispensers
            .iter()
            .find(|dispenser| dispenser.id == id)
            .ok_or(PlatingError::DispenserNotFound { id })
    }
}
