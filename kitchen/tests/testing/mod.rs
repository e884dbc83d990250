#![allow(dead_code)]

use std::collections::HashMap;

use kitchen::api::{Action, ActionError, Event};
use kitchen::collections::Shared;
use kitchen::data::KitchenConfig;
use kitchen::delivery::{OrderId, RecipeKey};
use kitchen::holding::{HolderId, ItemId, ObjectKey, ObjectKind};
use kitchen::layout::Rotation;
use kitchen::math::{Cell, Position};
use kitchen::model::Counter;
use kitchen::timing::{GameMode, GamePhase};
use kitchen::Game;

pub const CHEF: &str = "chef";

pub fn at(x: i32, y: i32) -> Cell {
    [x, y]
}

pub fn load_game(mode: GameMode) -> Game {
    let config = KitchenConfig::from_file("../assets/kitchen.json").unwrap();
    let mut game = Game::new(config, mode);
    game.load_game_knowledge().unwrap();
    game.reseed(42);
    game
}

pub struct KitchenTestScenario {
    game: Game,
    counters: HashMap<String, Counter>,
    items: HashMap<String, ItemId>,
    spawned: ItemId,
    current_action_result: Option<Result<Vec<Event>, ActionError>>,
    current_update_events: Vec<Event>,
}

impl KitchenTestScenario {
    pub fn new() -> Self {
        Self::with_mode(GameMode::Casual)
    }

    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            game: load_game(mode),
            counters: Default::default(),
            items: Default::default(),
            spawned: ItemId(0),
            current_action_result: None,
            current_update_events: vec![],
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn counter(&self, name: &str) -> Counter {
        *self.counters.get(name).unwrap()
    }

    pub fn holder(&self, name: &str) -> HolderId {
        if name == CHEF {
            self.game.universe.chef.unwrap().holder
        } else {
            self.counter(name).holder
        }
    }

    pub fn item(&self, name: &str) -> ItemId {
        *self.items.get(name).unwrap()
    }

    /// Identifier the next spawned item received during last action.
    pub fn spawned(&self) -> ItemId {
        self.spawned
    }

    pub fn object(&self, name: &str) -> ObjectKey {
        self.game.known.objects.find(name).unwrap().id
    }

    pub fn object_kind(&self, name: &str) -> Shared<ObjectKind> {
        self.game.known.objects.find(name).unwrap()
    }

    pub fn recipe(&self, name: &str) -> RecipeKey {
        self.game.known.recipes.find(name).unwrap().id
    }

    pub fn given_counter(mut self, kind: &str, name: &str, cell: Cell) -> Self {
        let kind = self.game.known.counters.find(kind).unwrap();
        self.game
            .appear_counter(&kind, cell, Rotation::North)
            .unwrap();
        let counter = *self.game.universe.counters.last().unwrap();
        self.counters.insert(name.to_string(), counter);
        self
    }

    pub fn given_wall(mut self, cell: Cell) -> Self {
        self.game.appear_wall(cell, Rotation::North, false);
        self
    }

    pub fn given_chef(mut self, position: Position) -> Self {
        self.game.appear_chef(position).unwrap();
        self
    }

    pub fn given_playing(mut self) -> Self {
        self.game.timing.phase = GamePhase::Playing;
        self
    }

    pub fn given_target_score(mut self, target: u32, score: u32) -> Self {
        self.game.delivery.set_target_score(target);
        self.game.delivery.score = score;
        self
    }

    pub fn given_item(mut self, holder: &str, kind: &str, name: &str) -> Self {
        let holder = self.holder(holder);
        let kind = self.object_kind(kind);
        let id = self.game.holding.items_id.introduce().one(ItemId);
        let spawn = self.game.holding.spawn_item(id, &kind, holder).unwrap();
        spawn();
        self.items.insert(name.to_string(), id);
        self
    }

    pub fn given_plate(mut self, holder: &str, ingredients: &[&str], name: &str) -> Self {
        self = self.given_item(holder, "plate", name);
        let plate = self.item(name);
        for ingredient in ingredients {
            let kind = self.object_kind(ingredient);
            let add = self.game.holding.add_ingredient(plate, &kind).unwrap();
            add();
        }
        self
    }

    pub fn given_order(mut self, recipe: &str) -> Self {
        let kind = self.game.known.recipes.find(recipe).unwrap();
        let id = self.game.delivery.orders_id.introduce().one(OrderId);
        let spawn = self.game.delivery.spawn_order(id, &kind).unwrap();
        spawn();
        self
    }

    pub fn given_plates_supply(mut self, counter: &str, supply: usize) -> Self {
        let dispenser = self.counter(counter).dispenser.unwrap();
        self.game
            .plating
            .get_dispenser_mut(dispenser)
            .unwrap()
            .supply = supply;
        self
    }

    fn select(&mut self, counter: &str) {
        let counter = self.counter(counter).id;
        if let Some(chef) = self.game.universe.chef.as_mut() {
            chef.selected = Some(counter);
        }
    }

    pub fn when_chef_interacts_with(mut self, counter: &str) -> Self {
        self.select(counter);
        self.when_chef_performs(Action::Interact)
    }

    pub fn when_chef_interacts_alternately_with(mut self, counter: &str) -> Self {
        self.select(counter);
        self.when_chef_performs(Action::InteractAlternate)
    }

    pub fn when_chef_performs(mut self, action: Action) -> Self {
        self.spawned = self.game.holding.items_id.introduce().one(ItemId);
        self.current_action_result = Some(self.game.perform_action(action));
        self
    }

    pub fn when_updated(mut self, seconds: f32) -> Self {
        self.spawned = self.game.holding.items_id.introduce().one(ItemId);
        self.current_update_events = self.game.update(seconds);
        self
    }

    fn take_action_events(&mut self) -> Vec<Event> {
        match self.current_action_result.take() {
            Some(Ok(events)) => events,
            Some(Err(error)) => panic!("action failed with {:?}", error),
            None => panic!("no action performed"),
        }
    }

    pub fn then_events_should_be<F>(mut self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let actual_events = self.take_action_events();
        let expected_events = expected_events(&self);
        let actual_events = format!("{:?}", actual_events);
        let expected_events = format!("{:?}", expected_events);
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_events_should_match<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&Self, &[Event]),
    {
        let actual_events = self.take_action_events();
        check(&self, &actual_events);
        self
    }

    pub fn then_nothing_should_happen(self) -> Self {
        self.then_events_should_be(|_| vec![])
    }

    pub fn then_action_should_fail(mut self, expected: ActionError) -> Self {
        match self.current_action_result.take() {
            Some(Err(error)) => assert_eq!(error, expected),
            other => panic!("action should fail, got {:?}", other),
        }
        self
    }

    pub fn then_update_events_should_contain<F>(self, expected_event: F) -> Self
    where
        F: FnOnce(&Self) -> Event,
    {
        let expected_event = expected_event(&self);
        let contains = self
            .current_update_events
            .iter()
            .any(|event| contains_all(event, &expected_event));
        assert!(
            contains,
            "{:?} not found in {:?}",
            expected_event, self.current_update_events
        );
        self
    }

    pub fn then_holder_should_contain(self, holder: &str, kind: Option<&str>) -> Self {
        let item = self
            .game
            .holding
            .get_holder_item(self.holder(holder))
            .unwrap()
            .map(|item| item.kind.name.clone());
        assert_eq!(item.as_deref(), kind);
        self.game.holding.validate_links().unwrap();
        self
    }

    pub fn then_plate_should_contain(self, holder: &str, ingredients: &[&str]) -> Self {
        let plate = self
            .game
            .holding
            .get_holder_item(self.holder(holder))
            .unwrap()
            .unwrap();
        let expected: Vec<ObjectKey> = ingredients.iter().map(|name| self.object(name)).collect();
        assert_eq!(plate.ingredient_keys(), expected);
        self
    }

    pub fn then_check<F>(self, check: F) -> Self
    where
        F: FnOnce(&Game),
    {
        check(&self.game);
        self
    }
}

/// Every domain event of expected group occurs in actual group of the same domain.
fn contains_all(actual: &Event, expected: &Event) -> bool {
    match (actual, expected) {
        (Event::Universe(actual), Event::Universe(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Holding(actual), Event::Holding(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Cooking(actual), Event::Cooking(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Delivery(actual), Event::Delivery(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Plating(actual), Event::Plating(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Timing(actual), Event::Timing(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        (Event::Layout(actual), Event::Layout(expected)) => {
            expected.iter().all(|event| actual.contains(event))
        }
        _ => false,
    }
}
