use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn toggle_pause(&mut self) -> Result<Vec<Event>, ActionError> {
        Ok(occur![self.timing.toggle_pause()])
    }
}
