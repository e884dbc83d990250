use crate::timing::{GamePhase, TimingDomain};

impl TimingDomain {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Share of playing time already spent.
    pub fn playing_progress(&self) -> f32 {
        if self.playing_duration <= 0.0 {
            return 1.0;
        }
        (1.0 - self.playing_timer / self.playing_duration).clamp(0.0, 1.0)
    }
}
