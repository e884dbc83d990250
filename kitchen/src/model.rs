use serde::Deserialize;

use crate::collections::{Dictionary, Sequence, Shared};
use crate::cooking::{BurningKey, BurningKind, FryingKey, FryingKind, StoveId};
use crate::delivery::{RecipeKey, RecipeKind};
use crate::holding::{CuttingKey, CuttingKind, HolderId, ObjectKey, ObjectKind};
use crate::layout::Rotation;
use crate::math::{Cell, GridSweep, Position};
use crate::plating::DispenserId;

#[derive(Default)]
pub struct Knowledge {
    pub objects: Dictionary<ObjectKey, ObjectKind>,
    pub cutting: Dictionary<CuttingKey, CuttingKind>,
    pub frying: Dictionary<FryingKey, FryingKind>,
    pub burning: Dictionary<BurningKey, BurningKind>,
    pub recipes: Dictionary<RecipeKey, RecipeKind>,
    pub counters: Dictionary<CounterKey, CounterKind>,
}

impl Knowledge {
    pub fn find_cutting(&self, input: ObjectKey) -> Option<Shared<CuttingKind>> {
        self.cutting.find_by(|kind| kind.input == input)
    }

    pub fn find_frying(&self, input: ObjectKey) -> Option<Shared<FryingKind>> {
        self.frying.find_by(|kind| kind.input == input)
    }

    pub fn find_burning(&self, input: ObjectKey) -> Option<Shared<BurningKind>> {
        self.burning.find_by(|kind| kind.input == input)
    }

    pub fn find_plate(&self) -> Option<Shared<ObjectKind>> {
        self.objects.find_by(|kind| kind.plate)
    }

    pub fn is_plateable(&self, key: ObjectKey) -> bool {
        self.objects
            .get(key)
            .map(|kind| !kind.plate && kind.plateable)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Clear,
    Cutting,
    Stove,
    Plates,
    Delivery,
    Trash,
    Container { object: ObjectKey },
}

pub struct CounterKind {
    pub id: CounterKey,
    pub name: String,
    pub capability: Capability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CounterId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    pub id: CounterId,
    pub key: CounterKey,
    pub holder: HolderId,
    pub cell: Cell,
    pub rotation: Rotation,
    pub stove: Option<StoveId>,
    pub dispenser: Option<DispenserId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub cell: Cell,
    pub rotation: Rotation,
    pub corner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chef {
    pub holder: HolderId,
    pub position: Position,
    pub facing: Position,
    pub input: Position,
    pub selected: Option<CounterId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChefSettings {
    pub speed: f32,
    pub radius: f32,
    pub interact_distance: f32,
}

impl Default for ChefSettings {
    fn default() -> Self {
        Self {
            speed: 7.0,
            radius: 0.35,
            interact_distance: 2.0,
        }
    }
}

#[derive(Default)]
pub struct UniverseDomain {
    pub counters_id: Sequence,
    pub counters: Vec<Counter>,
    pub walls: Vec<Wall>,
    pub chef: Option<Chef>,
    pub sweep: GridSweep,
}

impl UniverseDomain {
    pub fn get_counter(&self, id: CounterId) -> Result<Counter, UniverseError> {
        self.counters
            .iter()
            .find(|counter| counter.id == id)
            .cloned()
            .ok_or(UniverseError::CounterNotFound { id })
    }

    pub fn get_counter_by_stove(&self, stove: StoveId) -> Result<Counter, UniverseError> {
        self.counters
            .iter()
            .find(|counter| counter.stove == Some(stove))
            .cloned()
            .ok_or(UniverseError::StoveCounterNotFound { stove })
    }

    pub fn get_counter_at(&self, cell: Cell) -> Option<Counter> {
        self.counters
            .iter()
            .find(|counter| counter.cell == cell)
            .cloned()
    }

    pub fn get_chef(&self) -> Result<Chef, UniverseError> {
        self.chef.ok_or(UniverseError::ChefNotFound)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.sweep.occupied.contains(&cell)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Universe {
    CounterAppeared {
        entity: Counter,
    },
    WallAppeared {
        entity: Wall,
    },
    ChefAppeared {
        entity: Chef,
    },
    ChefMoved {
        position: Position,
        facing: Position,
    },
    CounterSelected {
        counter: Option<CounterId>,
    },
    AnyCut {
        counter: CounterId,
    },
    ItemTrashed {
        counter: CounterId,
    },
}

#[derive(Debug, PartialEq)]
pub enum UniverseError {
    CounterNotFound { id: CounterId },
    StoveCounterNotFound { stove: StoveId },
    ChefNotFound,
    BoundaryNotGenerated,
}
