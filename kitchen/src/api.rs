use crate::collections::DictionaryError;
use crate::cooking::{Cooking, CookingError};
use crate::delivery::{Delivery, DeliveryError};
use crate::holding::{HolderId, Holding, HoldingError};
use crate::layout::Layout;
use crate::model::{CounterId, Universe, UniverseError};
use crate::plating::{Plating, PlatingError};
use crate::timing::{Timing, TimingError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    MovePlayer { direction: [f32; 2] },
    Interact,
    InteractAlternate,
    TogglePause,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Universe(Vec<Universe>),
    Holding(Vec<Holding>),
    Cooking(Vec<Cooking>),
    Delivery(Vec<Delivery>),
    Plating(Vec<Plating>),
    Timing(Vec<Timing>),
    Layout(Vec<Layout>),
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Universe(events) => events.is_empty(),
            Event::Holding(events) => events.is_empty(),
            Event::Cooking(events) => events.is_empty(),
            Event::Delivery(events) => events.is_empty(),
            Event::Plating(events) => events.is_empty(),
            Event::Timing(events) => events.is_empty(),
            Event::Layout(events) => events.is_empty(),
        }
    }
}

impl From<Vec<Universe>> for Event {
    fn from(events: Vec<Universe>) -> Self {
        Self::Universe(events)
    }
}

impl From<Vec<Holding>> for Event {
    fn from(events: Vec<Holding>) -> Self {
        Self::Holding(events)
    }
}

impl From<Vec<Cooking>> for Event {
    fn from(events: Vec<Cooking>) -> Self {
        Self::Cooking(events)
    }
}

impl From<Vec<Delivery>> for Event {
    fn from(events: Vec<Delivery>) -> Self {
        Self::Delivery(events)
    }
}

impl From<Vec<Plating>> for Event {
    fn from(events: Vec<Plating>) -> Self {
        Self::Plating(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Self::Timing(events)
    }
}

impl From<Vec<Layout>> for Event {
    fn from(events: Vec<Layout>) -> Self {
        Self::Layout(events)
    }
}

#[derive(Debug, PartialEq)]
pub enum ActionError {
    HolderIsEmpty { holder: HolderId },
    CounterMisconfigured { counter: CounterId },
    PlateKindNotFound,
    CuttingNotFound,
    FryingNotFound,
    Universe(UniverseError),
    Holding(HoldingError),
    Cooking(CookingError),
    Delivery(DeliveryError),
    Plating(PlatingError),
    Timing(TimingError),
    Inconsistency(DictionaryError),
}

impl From<UniverseError> for ActionError {
    fn from(error: UniverseError) -> Self {
        Self::Universe(error)
    }
}

impl From<HoldingError> for ActionError {
    fn from(error: HoldingError) -> Self {
        Self::Holding(error)
    }
}

impl From<CookingError> for ActionError {
    fn from(error: CookingError) -> Self {
        Self::Cooking(error)
    }
}

impl From<DeliveryError> for ActionError {
    fn from(error: DeliveryError) -> Self {
        Self::Delivery(error)
    }
}

impl From<PlatingError> for ActionError {
    fn from(error: PlatingError) -> Self {
        Self::Plating(error)
    }
}

impl From<TimingError> for ActionError {
    fn from(error: TimingError) -> Self {
        Self::Timing(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}
