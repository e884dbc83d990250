use crate::cooking::Cooking::StoveStateChanged;
use crate::cooking::{Cooking, CookingDomain, CookingError, CookingState, Stove, StoveId};

impl CookingDomain {
    pub fn create_stove(
        &mut self,
        id: StoveId,
    ) -> Result<impl FnOnce() -> Vec<Cooking> + '_, CookingError> {
        let stove = Stove {
            id,
            state: CookingState::Idle,
            progress: 0.0,
            frying: None,
            burning: None,
            warned: false,
        };
        let command = move || {
            self.stoves_id.register(id.0);
            self.stoves.push(stove);
            vec![StoveStateChanged {
                stove: id,
                state: CookingState::Idle,
            }]
        };
        Ok(command)
    }
}
