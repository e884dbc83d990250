use crate::collections::{Sequence, Shared};
use crate::holding::ObjectKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FryingKey(pub usize);

pub struct FryingKind {
    pub id: FryingKey,
    pub name: String,
    pub input: ObjectKey,
    pub output: ObjectKey,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurningKey(pub usize);

pub struct BurningKind {
    pub id: BurningKey,
    pub name: String,
    pub input: ObjectKey,
    pub output: ObjectKey,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoveId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookingState {
    Idle,
    Frying,
    Fried,
    Burned,
}

pub struct Stove {
    pub id: StoveId,
    pub state: CookingState,
    pub progress: f32,
    pub frying: Option<Shared<FryingKind>>,
    pub burning: Option<Shared<BurningKind>>,
    pub warned: bool,
}

impl Stove {
    /// Progress of current phase in range `0.0..=1.0`.
    pub fn normalized_progress(&self) -> f32 {
        let duration = match self.state {
            CookingState::Frying => self.frying.as_ref().map(|kind| kind.duration),
            CookingState::Fried => self.burning.as_ref().map(|kind| kind.duration),
            CookingState::Idle | CookingState::Burned => None,
        };
        match duration {
            Some(duration) if duration > 0.0 => (self.progress / duration).min(1.0),
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cooking {
    StoveStateChanged {
        stove: StoveId,
        state: CookingState,
    },
    StoveProgressChanged {
        stove: StoveId,
        progress: f32,
    },
    FryingCompleted {
        stove: StoveId,
        output: ObjectKey,
    },
    BurningCompleted {
        stove: StoveId,
        output: ObjectKey,
    },
    BurnWarning {
        stove: StoveId,
    },
}

#[derive(Debug, PartialEq)]
pub enum CookingError {
    StoveNotFound { id: StoveId },
    StoveIsBusy { id: StoveId, state: CookingState },
}

pub struct CookingDomain {
    pub stoves_id: Sequence,
    pub stoves: Vec<Stove>,
    pub warning_threshold: f32,
}

impl Default for CookingDomain {
    fn default() -> Self {
        Self {
            stoves_id: Sequence::default(),
            stoves: vec![],
            warning_threshold: 0.5,
        }
    }
}
