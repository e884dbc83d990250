use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GameMode {
    Casual,
    Challenging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    WaitingToStart,
    CountdownToStart,
    Playing,
    Over,
}

pub struct TimingDomain {
    pub mode: GameMode,
    pub phase: GamePhase,
    pub paused: bool,
    pub countdown: f32,
    pub countdown_duration: f32,
    pub playing_timer: f32,
    pub playing_duration: f32,
    pub last_added_time: f32,
}

impl Default for TimingDomain {
    fn default() -> Self {
        Self {
            mode: GameMode::Casual,
            phase: GamePhase::WaitingToStart,
            paused: false,
            countdown: 3.0,
            countdown_duration: 3.0,
            playing_timer: 120.0,
            playing_duration: 120.0,
            last_added_time: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Timing {
    PhaseChanged { phase: GamePhase },
    CountdownUpdated { remaining: f32 },
    PlayingTimeUpdated { remaining: f32, normalized: f32 },
    TimeAdded { seconds: f32 },
    Paused,
    Unpaused,
}

#[derive(Debug, PartialEq)]
pub enum TimingError {
    GameAlreadyStarted { phase: GamePhase },
}
