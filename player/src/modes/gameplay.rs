use std::path::Path;

use datamap::{Binding, KeyBindings, Preferences, RankBook, Storage};
use hosting::{EventBus, GameHostingThread, RecordKeeper, Request, Subscriber};
use kitchen::api::{Action, Event};
use kitchen::cooking::Cooking;
use kitchen::data::KitchenConfig;
use kitchen::model::Universe;
use kitchen::timing::{GameMode, Timing};
use log::{debug, error, info};

use crate::input::Input;
use crate::modes::Mode;

pub const STOP_KEY: char = 'x';
pub const NEXT_LEVEL_KEY: char = 'n';
pub const RESTART_KEY: char = 'r';

struct EventLogger;

impl Subscriber for EventLogger {
    fn handle(&mut self, event: &Event) {
        let noisy = match event {
            Event::Timing(events) => events.iter().all(|event| {
                matches!(
                    event,
                    Timing::CountdownUpdated { .. } | Timing::PlayingTimeUpdated { .. }
                )
            }),
            Event::Universe(events) => events
                .iter()
                .all(|event| matches!(event, Universe::ChefMoved { .. })),
            Event::Cooking(events) => events
                .iter()
                .all(|event| matches!(event, Cooking::StoveProgressChanged { .. })),
            _ => false,
        };
        if noisy {
            debug!("{:?}", event);
        } else {
            info!("{:?}", event);
        }
    }
}

pub struct Gameplay {
    config: KitchenConfig,
    mode: GameMode,
    bindings: KeyBindings,
    previous_score: u32,
    keeper: Option<RecordKeeper>,
    hosting: Option<GameHostingThread>,
}

impl Gameplay {
    pub fn new(config: KitchenConfig, mode: GameMode, assets: &Path) -> Box<Self> {
        let mut bindings = KeyBindings::default();
        let mut previous_score = 0;
        let keeper = match Storage::open(assets.join("preferences.sqlite")) {
            Ok(storage) => {
                let preferences = Preferences::new(storage);
                match preferences.key_bindings() {
                    Ok(stored) => bindings = stored,
                    Err(error) => error!("Unable to load key bindings, {:?}", error),
                }
                match preferences.current_level_score() {
                    Ok(score) => previous_score = score,
                    Err(error) => error!("Unable to load level progress, {:?}", error),
                }
                let ranking = RankBook::new(assets.join("ranking.json"));
                Some(RecordKeeper::new(mode, preferences, ranking))
            }
            Err(error) => {
                error!("Unable to open preferences, records are not kept, {:?}", error);
                None
            }
        };
        Box::new(Self {
            config,
            mode,
            bindings,
            previous_score,
            keeper,
            hosting: None,
        })
    }

    fn translate(&self, key: char) -> Option<Request> {
        let direction = |x: f32, y: f32| {
            Some(Request::Perform(Action::MovePlayer {
                direction: [x, y],
            }))
        };
        match key {
            STOP_KEY => return direction(0.0, 0.0),
            NEXT_LEVEL_KEY => return Some(Request::NextLevel),
            RESTART_KEY => return Some(Request::RestartLevel),
            _ => {}
        }
        match self.bindings.binding(key)? {
            Binding::MoveUp => direction(0.0, 1.0),
            Binding::MoveDown => direction(0.0, -1.0),
            Binding::MoveLeft => direction(-1.0, 0.0),
            Binding::MoveRight => direction(1.0, 0.0),
            Binding::Interact => Some(Request::Perform(Action::Interact)),
            Binding::InteractAlternate => Some(Request::Perform(Action::InteractAlternate)),
            Binding::Pause => Some(Request::Perform(Action::TogglePause)),
        }
    }
}

impl Mode for Gameplay {
    fn start(&mut self) {
        let mut bus = EventBus::new();
        bus.subscribe(Box::new(EventLogger));
        if let Some(keeper) = self.keeper.take() {
            bus.subscribe(Box::new(keeper));
        }
        info!(
            "Keys: {:?}, {} stop, {} next level, {} restart, q quit",
            self.bindings.keys, STOP_KEY, NEXT_LEVEL_KEY, RESTART_KEY
        );
        self.hosting = Some(GameHostingThread::spawn(
            self.config.clone(),
            self.mode,
            bus,
            self.previous_score,
        ));
    }

    fn update(&mut self, input: &Input) {
        let hosting = match self.hosting.as_ref() {
            Some(hosting) => hosting,
            None => return,
        };
        for key in input.keys() {
            match self.translate(*key) {
                Some(request) => {
                    if !hosting.request(request) {
                        error!("Game is not hosted anymore");
                    }
                }
                None => info!("Unknown key {:?}", key),
            }
        }
    }

    fn finish(&mut self) {
        if let Some(mut hosting) = self.hosting.take() {
            hosting.terminate();
        }
    }
}
