use crate::timing::Timing::{CountdownUpdated, PhaseChanged, PlayingTimeUpdated};
use crate::timing::{GamePhase, Timing, TimingDomain};
use log::info;

impl TimingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Timing> {
        if self.paused {
            return vec![];
        }
        let mut events = vec![];
        match self.phase {
            GamePhase::WaitingToStart | GamePhase::Over => {}
            GamePhase::CountdownToStart => {
                self.countdown -= time;
                if self.countdown <= 0.0 {
                    self.countdown = 0.0;
                    self.phase = GamePhase::Playing;
                    self.playing_timer = self.playing_duration;
                    info!("Game started, {}s to play", self.playing_duration);
                    events.push(PhaseChanged { phase: self.phase });
                } else {
                    events.push(CountdownUpdated {
                        remaining: self.countdown,
                    });
                }
            }
            GamePhase::Playing => {
                self.playing_timer -= time;
                if self.playing_timer <= 0.0 {
                    self.playing_timer = 0.0;
                    self.phase = GamePhase::Over;
                    info!("Game over");
                    events.push(PhaseChanged { phase: self.phase });
                } else {
                    events.push(PlayingTimeUpdated {
                        remaining: self.playing_timer,
                        normalized: self.playing_progress(),
                    });
                }
            }
        }
        events
    }
}
