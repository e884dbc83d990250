use crate::plating::Plating::PlateReturned;
use crate::plating::{DispenserId, Plating, PlatingDomain, PlatingError};

impl PlatingDomain {
    pub fn return_plate(
        &mut self,
        id: DispenserId,
    ) -> Result<impl FnOnce() -> Vec<Plating> + '_, PlatingError> {
        let dispenser = self.get_dispenser_mut(id)?;
        if dispenser.supply >= dispenser.capacity {
            return Err(PlatingError::DispenserIsFull { id });
        }
        let command = move || {
            dispenser.supply += 1;
            vec![PlateReturned {
                dispenser: id,
                supply: dispenser.supply,
            }]
        };
        Ok(command)
    }
}
