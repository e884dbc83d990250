use crate::collections::{Sequence, Shared};
use crate::holding::ObjectKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeKey(pub usize);

pub struct RecipeKind {
    pub id: RecipeKey,
    pub name: String,
    pub ingredients: Vec<ObjectKey>,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub usize);

pub struct Order {
    pub id: OrderId,
    pub kind: Shared<RecipeKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    OrderSpawned { order: OrderId, recipe: RecipeKey },
    OrderCompleted { order: OrderId, recipe: RecipeKey },
    DeliverySucceeded { recipe: RecipeKey },
    DeliveryFailed,
    ScoreChanged { score: u32 },
    TargetScoreChanged { target: u32 },
    GameWon { score: u32, target: u32 },
}

#[derive(Debug, PartialEq)]
pub enum DeliveryError {
    OrderNotFound { index: usize },
    OrdersQueueIsFull { capacity: usize },
}

pub struct DeliveryDomain {
    pub orders_id: Sequence,
    pub orders: Vec<Order>,
    pub catalog: Vec<Shared<RecipeKind>>,
    pub capacity: usize,
    pub spawn_interval: f32,
    pub spawn_timer: f32,
    pub successful: usize,
    pub score: u32,
    pub target_score: u32,
    pub won: bool,
}

impl Default for DeliveryDomain {
    fn default() -> Self {
        Self {
            orders_id: Sequence::default(),
            orders: vec![],
            catalog: vec![],
            capacity: 4,
            spawn_interval: 4.0,
            spawn_timer: 4.0,
            successful: 0,
            score: 0,
            target_score: 0,
            won: false,
        }
    }
}
