use crate::plating::{Dispenser, DispenserId, Plating, PlatingDomain, PlatingError};

impl PlatingDomain {
    pub fn create_dispenser(
        &mut self,
        id: DispenserId,
        capacity: usize,
        interval: f32,
    ) -> Result<impl FnOnce() -> Vec<Plating> + '_, PlatingError> {
        let dispenser = Dispenser {
            id,
            supply: 0,
            capacity,
            interval,
            timer: 0.0,
        };
        let command = move || {
            self.dispensers_id.register(id.0);
            self.dispensers.push(dispenser);
            vec![]
        };
        Ok(command)
    }
}
