use crate::timing::Timing::{Paused, Unpaused};
use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn toggle_pause(&mut self) -> Vec<Timing> {
        self.paused = !self.paused;
        if self.paused {
            vec![Paused]
        } else {
            vec![Unpaused]
        }
    }

    pub fn pause(&mut self) -> Vec<Timing> {
        if self.paused {
            return vec![];
        }
        self.paused = true;
        vec![Paused]
    }
}
