use crate::timing::Timing::PhaseChanged;
use crate::timing::{GamePhase, Timing, TimingDomain, TimingError};
use log::info;

impl TimingDomain {
    pub fn start_countdown(&mut self) -> Result<impl FnOnce() -> Vec<Timing> + '_, TimingError> {
        if self.phase != GamePhase::WaitingToStart {
            return Err(TimingError::GameAlreadyStarted { phase: self.phase });
        }
        let command = move || {
            info!("Start countdown {}s", self.countdown_duration);
            self.phase = GamePhase::CountdownToStart;
            self.countdown = self.countdown_duration;
            vec![PhaseChanged { phase: self.phase }]
        };
        Ok(command)
    }
}
