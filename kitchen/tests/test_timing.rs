use kitchen::timing::{GamePhase, Timing, TimingDomain, TimingError};

fn domain() -> TimingDomain {
    TimingDomain::default()
}

#[test]
fn test_game_waits_until_started() {
    let mut timing = domain();
    assert_eq!(timing.update(10.0), vec![]);
    assert_eq!(timing.phase, GamePhase::WaitingToStart);
}

#[test]
fn test_countdown_leads_to_playing() {
    let mut timing = domain();
    let start = timing.start_countdown().unwrap();
    assert_eq!(
        start(),
        vec![Timing::PhaseChanged {
            phase: GamePhase::CountdownToStart
        }]
    );

    assert_eq!(
        timing.update(1.0),
        vec![Timing::CountdownUpdated { remaining: 2.0 }]
    );
    assert_eq!(
        timing.update(2.0),
        vec![Timing::PhaseChanged {
            phase: GamePhase::Playing
        }]
    );
    assert!(timing.is_playing());
    assert_eq!(timing.playing_progress(), 0.0);
}

#[test]
fn test_game_is_over_when_time_runs_out() {
    let mut timing = domain();
    timing.phase = GamePhase::Playing;

    assert_eq!(
        timing.update(60.0),
        vec![Timing::PlayingTimeUpdated {
            remaining: 60.0,
            normalized: 0.5
        }]
    );
    assert_eq!(
        timing.update(60.0),
        vec![Timing::PhaseChanged {
            phase: GamePhase::Over
        }]
    );
    assert_eq!(timing.update(1.0), vec![]);
    assert_eq!(timing.playing_progress(), 1.0);
}

#[test]
fn test_added_time_extends_game() {
    let mut timing = domain();
    timing.phase = GamePhase::Playing;
    timing.update(119.0);

    assert_eq!(timing.add_time(5.0), vec![Timing::TimeAdded { seconds: 5.0 }]);
    assert_eq!(timing.last_added_time, 5.0);
    timing.update(5.0);

    assert!(timing.is_playing());
}

#[test]
fn test_countdown_cannot_be_started_twice() {
    let mut timing = domain();
    let start = timing.start_countdown().unwrap();
    start();

    assert_eq!(
        timing.start_countdown().err(),
        Some(TimingError::GameAlreadyStarted {
            phase: GamePhase::CountdownToStart
        })
    );
}

#[test]
fn test_paused_game_does_not_tick() {
    let mut timing = domain();
    timing.phase = GamePhase::Playing;

    assert_eq!(timing.toggle_pause(), vec![Timing::Paused]);
    assert_eq!(timing.update(200.0), vec![]);
    assert!(timing.is_playing());
    assert_eq!(timing.pause(), vec![]);
    assert_eq!(timing.toggle_pause(), vec![Timing::Unpaused]);
}
