use kitchen::api::Event;

pub trait Subscriber {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn handle(&mut self, event: &Event);
}

/// Delivers events to every subscriber in registration order.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn Subscriber + Send>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber + Send>) {
        log::info!("Subscribe {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn publish(&mut self, events: &[Event]) {
        for event in events {
            for subscriber in self.subscribers.iter_mut() {
                subscriber.handle(event);
            }
        }
    }
}
