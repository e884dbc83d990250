use crate::plating::Plating::PlateDispensed;
use crate::plating::{DispenserId, Plating, PlatingDomain, PlatingError};

impl PlatingDomain {
    pub fn dispense_plate(
        &mut self,
        id: DispenserId,
    ) -> Result<impl FnOnce() -> Vec<Plating> + '_, PlatingError> {
        let dispenser = self.get_dispenser_mut(id)?;
        if dispenser.supply == 0 {
            return Err(PlatingError::DispenserIsEmpty { id });
        }
        let command = move || {
            dispenser.supply -= 1;
            vec![PlateDispensed {
                dispenser: id,
                supply: dispenser.supply,
            }]
        };
        Ok(command)
    }
}
