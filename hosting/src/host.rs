use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use kitchen::api::{Action, Event};
use kitchen::data::{DataError, KitchenConfig};
use kitchen::delivery::Delivery;
use kitchen::timing::GameMode;
use kitchen::Game;
use log::{error, info, warn};

use crate::EventBus;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Perform(Action),
    /// Generates next level, target score follows last won score.
    NextLevel,
    RestartLevel,
}

/// Game with its subscribers, driven by requests and time.
pub struct Host {
    pub game: Game,
    pub bus: EventBus,
    previous_score: u32,
    level_score: u32,
}

impl Host {
    pub fn new(
        config: KitchenConfig,
        mode: GameMode,
        bus: EventBus,
        previous_score: u32,
    ) -> Result<Self, DataError> {
        let mut game = Game::new(config, mode);
        game.load_game_knowledge()?;
        Ok(Self {
            game,
            bus,
            previous_score,
            level_score: 0,
        })
    }

    pub fn previous_score(&self) -> u32 {
        self.previous_score
    }

    pub fn start_level(&mut self) {
        match self.game.generate_level(self.previous_score) {
            Ok(events) => self.publish(events),
            Err(error) => error!("Unable to generate level, {:?}", error),
        }
    }

    pub fn handle(&mut self, request: Request) {
        match request {
            Request::Perform(action) => match self.game.perform_action(action) {
                Ok(events) => self.publish(events),
                Err(error) => warn!("Action {:?} rejected, {:?}", action, error),
            },
            Request::NextLevel => {
                self.previous_score = self.level_score;
                self.start_level();
            }
            Request::RestartLevel => self.start_level(),
        }
    }

    pub fn update(&mut self, time: f32) {
        let events = self.game.update(time);
        self.publish(events);
    }

    fn publish(&mut self, events: Vec<Event>) {
        for event in &events {
            if let Event::Delivery(delivery) = event {
                for event in delivery {
                    if let Delivery::GameWon { score, .. } = event {
                        self.level_score = *score;
                    }
                }
            }
        }
        self.bus.publish(&events);
    }
}

pub struct GameHostingThread {
    running: Arc<AtomicBool>,
    requests: Sender<Request>,
    handle: Option<JoinHandle<()>>,
}

impl GameHostingThread {
    pub fn spawn(
        config: KitchenConfig,
        mode: GameMode,
        bus: EventBus,
        previous_score: u32,
    ) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_thread = running.clone();
        let (requests, receiver) = channel();
        let handle = thread::spawn(move || {
            info!("Start game hosting thread");
            match Host::new(config, mode, bus, previous_score) {
                Ok(host) => run(host, receiver, &running_thread),
                Err(error) => error!("Unable to load game knowledge, {:?}", error),
            }
            running_thread.store(false, Ordering::Relaxed);
            info!("Stop game hosting thread");
        });
        Self {
            running,
            requests,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn perform(&self, action: Action) -> bool {
        self.request(Request::Perform(action))
    }

    pub fn request(&self, request: Request) -> bool {
        self.requests.send(request).is_ok()
    }

    pub fn terminate(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Game hosting thread panicked");
            }
        }
    }
}

impl Drop for GameHostingThread {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn run(mut host: Host, requests: Receiver<Request>, running: &AtomicBool) {
    host.start_level();
    let mut tick = Instant::now();
    while running.load(Ordering::Relaxed) {
        loop {
            match requests.try_recv() {
                Ok(request) => host.handle(request),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("Requests channel closed");
                    return;
                }
            }
        }

        let time = tick.elapsed().as_secs_f32();
        tick = Instant::now();
        host.update(time);

        thread::sleep(Duration::from_millis(20));
    }
}
