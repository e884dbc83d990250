use crate::cooking::Cooking::{StoveProgressChanged, StoveStateChanged};
use crate::cooking::{Cooking, CookingDomain, CookingError, CookingState, StoveId};

impl CookingDomain {
    /// Resets stove after its item was taken. Unfinished progress is lost.
    pub fn stop_cooking(
        &mut self,
        id: StoveId,
    ) -> Result<impl FnOnce() -> Vec<Cooking> + '_, CookingError> {
        let stove = self.get_stove_mut(id)?;
        let command = move || {
            stove.state = CookingState::Idle;
            stove.progress = 0.0;
            stove.frying = None;
            stove.burning = None;
            stove.warned = false;
            vec![
                StoveStateChanged {
                    stove: id,
                    state: stove.state,
                },
                StoveProgressChanged {
                    stove: id,
                    progress: 0.0,
                },
            ]
        };
        Ok(command)
    }
}
