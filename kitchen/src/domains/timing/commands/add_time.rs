use crate::timing::Timing::TimeAdded;
use crate::timing::{Timing, TimingDomain};

impl TimingDomain {
    pub fn add_time(&mut self, seconds: f32) -> Vec<Timing> {
        self.playing_timer += seconds;
        self.last_added_time = seconds;
        vec![TimeAdded { seconds }]
    }
}
