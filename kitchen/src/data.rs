use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::collections::DictionaryError;
use crate::cooking::{BurningKey, BurningKind, FryingKey, FryingKind};
use crate::delivery::{RecipeKey, RecipeKind, ScoreSettings};
use crate::holding::{CuttingKey, CuttingKind, ObjectKey, ObjectKind};
use crate::layout::LayoutSettings;
use crate::model::{Capability, ChefSettings, CounterKey, CounterKind};
use crate::Game;

fn plateable_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(default)]
    pub visual: String,
    #[serde(default)]
    pub plate: bool,
    #[serde(default = "plateable_by_default")]
    pub plateable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuttingConfig {
    pub input: String,
    pub output: String,
    pub cuts: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CookingConfig {
    pub input: String,
    pub output: String,
    pub duration: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeConfig {
    pub name: String,
    pub ingredients: Vec<String>,
    pub points: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub enum FunctionConfig {
    Clear,
    Cutting,
    Stove,
    Plates,
    Delivery,
    Trash,
    Container { object: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    pub name: String,
    pub function: FunctionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub countdown: f32,
    pub playing_duration: f32,
    pub bonus_time: [f32; 2],
    pub burn_warning: f32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            countdown: 3.0,
            playing_duration: 120.0,
            bonus_time: [2.0, 5.0],
            burn_warning: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    pub capacity: usize,
    pub interval: f32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            capacity: 4,
            interval: 4.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KitchenConfig {
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub cutting: Vec<CuttingConfig>,
    #[serde(default)]
    pub frying: Vec<CookingConfig>,
    #[serde(default)]
    pub burning: Vec<CookingConfig>,
    pub recipes: Vec<RecipeConfig>,
    pub counters: Vec<CounterConfig>,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub orders: QueueSettings,
    #[serde(default)]
    pub plates: QueueSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub score: ScoreSettings,
    #[serde(default)]
    pub chef: ChefSettings,
}

impl KitchenConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Self, DataError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Game {
    pub fn load_game_knowledge(&mut self) -> Result<(), DataError> {
        info!(
            "Begin game knowledge loading: {} objects, {} recipes, {} counters",
            self.config.objects.len(),
            self.config.recipes.len(),
            self.config.counters.len()
        );
        let config = self.config.clone();
        for (index, object) in config.objects.iter().enumerate() {
            let kind = ObjectKind {
                id: ObjectKey(index + 1),
                name: object.name.clone(),
                visual: object.visual.clone(),
                plate: object.plate,
                plateable: object.plateable && !object.plate,
            };
            self.known.objects.insert(kind.id, kind.name.clone(), kind);
        }
        for (index, cutting) in config.cutting.iter().enumerate() {
            let kind = CuttingKind {
                id: CuttingKey(index + 1),
                name: format!("{}->{}", cutting.input, cutting.output),
                input: self.known.objects.find(&cutting.input)?.id,
                output: self.known.objects.find(&cutting.output)?.id,
                cuts: cutting.cuts.max(1),
            };
            self.known.cutting.insert(kind.id, kind.name.clone(), kind);
        }
        for (index, frying) in config.frying.iter().enumerate() {
            let kind = FryingKind {
                id: FryingKey(index + 1),
                name: format!("{}->{}", frying.input, frying.output),
                input: self.known.objects.find(&frying.input)?.id,
                output: self.known.objects.find(&frying.output)?.id,
                duration: frying.duration,
            };
            self.known.frying.insert(kind.id, kind.name.clone(), kind);
        }
        for (index, burning) in config.burning.iter().enumerate() {
            let kind = BurningKind {
                id: BurningKey(index + 1),
                name: format!("{}->{}", burning.input, burning.output),
                input: self.known.objects.find(&burning.input)?.id,
                output: self.known.objects.find(&burning.output)?.id,
                duration: burning.duration,
            };
            self.known.burning.insert(kind.id, kind.name.clone(), kind);
        }
        for (index, recipe) in config.recipes.iter().enumerate() {
            let mut ingredients = vec![];
            for ingredient in &recipe.ingredients {
                ingredients.push(self.known.objects.find(ingredient)?.id);
            }
            let kind = RecipeKind {
                id: RecipeKey(index + 1),
                name: recipe.name.clone(),
                ingredients,
                points: recipe.points,
            };
            self.known.recipes.insert(kind.id, kind.name.clone(), kind);
        }
        for (index, counter) in config.counters.iter().enumerate() {
            let capability = match &counter.function {
                FunctionConfig::Clear => Capability::Clear,
                FunctionConfig::Cutting => Capability::Cutting,
                FunctionConfig::Stove => Capability::Stove,
                FunctionConfig::Plates => Capability::Plates,
                FunctionConfig::Delivery => Capability::Delivery,
                FunctionConfig::Trash => Capability::Trash,
                FunctionConfig::Container { object } => Capability::Container {
                    object: self.known.objects.find(object)?.id,
                },
            };
            let kind = CounterKind {
                id: CounterKey(index + 1),
                name: counter.name.clone(),
                capability,
            };
            self.known.counters.insert(kind.id, kind.name.clone(), kind);
        }

        let catalog = self.known.recipes.iter().cloned().collect();
        self.delivery
            .load_catalog(catalog, config.orders.capacity, config.orders.interval);
        self.cooking.warning_threshold = config.session.burn_warning;
        self.timing.countdown_duration = config.session.countdown;
        self.timing.countdown = config.session.countdown;
        self.timing.playing_duration = config.session.playing_duration;
        self.timing.playing_timer = config.session.playing_duration;
        self.layout.settings = config.layout;
        info!("End game knowledge loading");
        Ok(())
    }
}

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Inconsistency(DictionaryError),
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}
