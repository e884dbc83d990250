use std::sync::{Arc, Mutex};

use hosting::{EventBus, Subscriber};
use kitchen::api::Event;
use kitchen::timing::Timing;

struct Recorder {
    name: &'static str,
    journal: Arc<Mutex<Vec<String>>>,
}

impl Subscriber for Recorder {
    fn handle(&mut self, event: &Event) {
        let mut journal = self.journal.lock().unwrap();
        journal.push(format!("{} {:?}", self.name, event));
    }
}

#[test]
fn test_events_delivered_in_registration_order() {
    let journal = Arc::new(Mutex::new(vec![]));
    let mut bus = EventBus::new();
    bus.subscribe(Box::new(Recorder {
        name: "first",
        journal: journal.clone(),
    }));
    bus.subscribe(Box::new(Recorder {
        name: "second",
        journal: journal.clone(),
    }));

    bus.publish(&[
        Event::Timing(vec![Timing::Paused]),
        Event::Timing(vec![Timing::Unpaused]),
    ]);

    let journal = journal.lock().unwrap();
    assert_eq!(
        *journal,
        vec![
            "first Timing([Paused])",
            "second Timing([Paused])",
            "first Timing([Unpaused])",
            "second Timing([Unpaused])",
        ]
    );
}

#[test]
fn test_empty_bus_accepts_events() {
    let mut bus = EventBus::new();
    bus.publish(&[Event::Timing(vec![Timing::Paused])]);
    assert!(bus.is_empty());
}
