use crate::collections::Shared;
use crate::cooking::Cooking::{StoveProgressChanged, StoveStateChanged};
use crate::cooking::{
    BurningKind, Cooking, CookingDomain, CookingError, CookingState, FryingKind, StoveId,
};

impl CookingDomain {
    /// Starts frying of just placed item. Burning recipe continues the cooking once fried.
    pub fn start_frying(
        &mut self,
        id: StoveId,
        frying: &Shared<FryingKind>,
        burning: Option<Shared<BurningKind>>,
    ) -> Result<impl FnOnce() -> Vec<Cooking> + '_, CookingError> {
        let stove = self.get_stove_mut(id)?;
        if stove.state != CookingState::Idle {
            return Err(CookingError::StoveIsBusy {
                id,
                state: stove.state,
            });
        }
        let frying = frying.clone();
        let command = move || {
            stove.state = CookingState::Frying;
            stove.progress = 0.0;
            stove.frying = Some(frying);
            stove.burning = burning;
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
