pub use domains::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::{Action, ActionError, Event};
use crate::cooking::CookingDomain;
use crate::data::KitchenConfig;
use crate::delivery::DeliveryDomain;
use crate::holding::HoldingDomain;
use crate::layout::LayoutDomain;
use crate::model::{Knowledge, UniverseDomain};
use crate::plating::PlatingDomain;
use crate::timing::{GameMode, TimingDomain};

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
mod instantiation;
pub mod math;
pub mod model;
pub mod rules;
mod update;
mod view;

#[macro_export]
macro_rules! occur {
    () => (
        vec![]
    );
    ($($x:expr),+ $(,)?) => (
        vec![$($x.into()),+]
    );
}

pub struct Game {
    pub config: KitchenConfig,
    pub known: Knowledge,
    pub universe: UniverseDomain,
    pub holding: HoldingDomain,
    pub cooking: CookingDomain,
    pub delivery: DeliveryDomain,
    pub plating: PlatingDomain,
    pub timing: TimingDomain,
    pub layout: LayoutDomain,
    random: StdRng,
}

impl Game {
    pub fn new(config: KitchenConfig, mode: GameMode) -> Self {
        let mut timing = TimingDomain::default();
        timing.mode = mode;
        Self {
            config,
            known: Knowledge::default(),
            universe: UniverseDomain::default(),
            holding: HoldingDomain::default(),
            cooking: CookingDomain::default(),
            delivery: DeliveryDomain::default(),
            plating: PlatingDomain::default(),
            timing,
            layout: LayoutDomain::default(),
            random: StdRng::from_entropy(),
        }
    }

    /// Makes every random decision of the game reproducible.
    pub fn reseed(&mut self, seed: u64) {
        self.random = StdRng::seed_from_u64(seed);
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        match action {
            Action::MovePlayer { direction } => self.move_chef(direction),
            Action::Interact => self.interact(),
            Action::InteractAlternate => self.interact_alternate(),
            Action::TogglePause => self.toggle_pause(),
        }
    }
}
