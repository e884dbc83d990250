use std::path::PathBuf;

use hosting::{KitchenLoader, LoadingState, SceneLoading};
use kitchen::data::KitchenConfig;
use kitchen::timing::GameMode;
use log::{error, info};

use crate::input::Input;
use crate::modes::{Gameplay, Mode};

pub struct Loading {
    assets: PathBuf,
    mode: GameMode,
    loading: SceneLoading<KitchenConfig>,
    config: Option<KitchenConfig>,
}

impl Loading {
    pub fn new(assets: &str, mode: GameMode) -> Box<Self> {
        Box::new(Self {
            assets: PathBuf::from(assets),
            mode,
            loading: SceneLoading::new("kitchen"),
            config: None,
        })
    }
}

impl Mode for Loading {
    fn start(&mut self) {
        self.loading
            .start(KitchenLoader::new(self.assets.join("kitchen.json")));
    }

    fn update(&mut self, _input: &Input) {
        let previous = self.loading.state();
        let state = self.loading.poll();
        if state == previous {
            return;
        }
        match state {
            LoadingState::Loading(progress) => info!("Loading {:.0}%", progress * 100.0),
            LoadingState::Ready => self.config = self.loading.activate(),
            LoadingState::Failed => error!("Kitchen is not loaded, press q to quit"),
            LoadingState::NotStarted | LoadingState::Activated => {}
        }
    }

    fn transition(&self) -> Option<Box<dyn Mode>> {
        self.config
            .as_ref()
            .map(|config| Gameplay::new(config.clone(), self.mode, &self.assets) as Box<dyn Mode>)
    }

    fn finish(&mut self) {
        self.loading.cancel();
    }
}
