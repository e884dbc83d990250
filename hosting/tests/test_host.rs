use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use hosting::{EventBus, GameHostingThread, Host, Request, Subscriber};
use kitchen::api::{Action, Event};
use kitchen::data::KitchenConfig;
use kitchen::timing::{GameMode, GamePhase, Timing};

#[derive(Clone, Default)]
struct Journal {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Journal {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl Subscriber for Journal {
    fn handle(&mut self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn config() -> KitchenConfig {
    KitchenConfig::from_file("../assets/kitchen.json").unwrap()
}

fn host(mode: GameMode) -> (Host, Journal) {
    let journal = Journal::default();
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(journal.clone()));
    let mut host = Host::new(config(), mode, bus, 0).unwrap();
    host.game.reseed(7);
    (host, journal)
}

#[test]
fn test_level_start_publishes_layout() {
    let (mut host, journal) = host(GameMode::Casual);

    host.start_level();

    let events = journal.take();
    assert!(matches!(events.first(), Some(Event::Layout(_))));
    assert!(host.game.universe.chef.is_some());
}

#[test]
fn test_first_interaction_starts_countdown() {
    let (mut host, journal) = host(GameMode::Casual);
    host.start_level();
    journal.take();

    host.handle(Request::Perform(Action::Interact));

    assert_eq!(
        journal.take(),
        vec![Event::Timing(vec![Timing::PhaseChanged {
            phase: GamePhase::CountdownToStart
        }])]
    );
}

#[test]
fn test_countdown_advances_with_updates() {
    let (mut host, journal) = host(GameMode::Casual);
    host.start_level();
    host.handle(Request::Perform(Action::Interact));
    journal.take();

    host.update(3.5);

    assert_eq!(host.game.timing.phase, GamePhase::Playing);
    let timing: Vec<Timing> = journal
        .take()
        .into_iter()
        .flat_map(|event| match event {
            Event::Timing(events) => events,
            _ => vec![],
        })
        .collect();
    assert!(timing.contains(&Timing::PhaseChanged {
        phase: GamePhase::Playing
    }));
}

#[test]
fn test_restart_regenerates_level() {
    let (mut host, journal) = host(GameMode::Challenging);
    host.start_level();
    host.handle(Request::Perform(Action::Interact));
    journal.take();

    host.handle(Request::RestartLevel);

    assert_eq!(host.game.timing.phase, GamePhase::WaitingToStart);
    assert!(host.game.delivery.target_score > 0);
    assert_eq!(host.previous_score(), 0);
    assert!(!journal.take().is_empty());
}

#[test]
fn test_hosting_thread_lifecycle() {
    let journal = Journal::default();
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(journal.clone()));
    let mut hosting = GameHostingThread::spawn(config(), GameMode::Casual, bus, 0);

    assert!(hosting.perform(Action::Interact));
    thread::sleep(Duration::from_millis(200));
    assert!(hosting.is_running());

    hosting.terminate();

    assert!(!hosting.is_running());
    let events = journal.take();
    assert!(matches!(events.first(), Some(Event::Layout(_))));
    assert!(events.contains(&Event::Timing(vec![Timing::PhaseChanged {
        phase: GamePhase::CountdownToStart
    }])));
}
