use log::info;

use crate::api::{ActionError, Event};
use crate::collections::Shared;
use crate::cooking::{CookingDomain, StoveId};
use crate::delivery::generate_target_score;
use crate::holding::{HolderId, HolderRole, HoldingDomain};
use crate::layout::{CellClass, Rotation};
use crate::math::{Cell, CellMath, Position};
use crate::model::{
    Capability, Chef, Counter, CounterId, CounterKind, Universe, UniverseDomain, UniverseError,
    Wall,
};
use crate::plating::{DispenserId, PlatingDomain};
use crate::timing::{GameMode, GamePhase};
use crate::{occur, Game};

impl Game {
    /// Generates fresh boundary and populates it with counters, walls and chef.
    pub fn generate_level(&mut self, previous_score: u32) -> Result<Vec<Event>, ActionError> {
        self.clear_level();
        let catalog: Vec<Shared<CounterKind>> = self.known.counters.iter().cloned().collect();
        let mut events: Vec<Event> = occur![self
            .layout
            .generate_boundary(catalog.len(), &mut self.random)];
        let boundary = self
            .layout
            .boundary
            .clone()
            .ok_or(UniverseError::BoundaryNotGenerated)?;
        for cell in &boundary.cells {
            let kind = match cell.class {
                CellClass::Interactive => cell.prefab.and_then(|index| catalog.get(index)),
                CellClass::Corner | CellClass::NonInteractive => None,
            };
            match kind {
                Some(kind) => events.extend(self.appear_counter(kind, cell.cell, cell.rotation)?),
                None => {
                    let corner = cell.class == CellClass::Corner;
                    events.push(vec![self.appear_wall(cell.cell, cell.rotation, corner)].into())
                }
            }
        }
        events.extend(self.appear_chef(boundary.spawn)?);

        if self.timing.mode == GameMode::Challenging {
            let target = generate_target_score(
                previous_score,
                boundary.cells.len(),
                &self.config.score,
                &mut self.random,
            );
            info!("Target score {} after previous {}", target, previous_score);
            events.push(self.delivery.set_target_score(target).into());
        }
        Ok(events)
    }

    fn clear_level(&mut self) {
        self.universe = UniverseDomain::default();
        self.holding = HoldingDomain::default();
        self.plating = PlatingDomain::default();
        let warning_threshold = self.cooking.warning_threshold;
        self.cooking = CookingDomain::default();
        self.cooking.warning_threshold = warning_threshold;
        self.delivery.orders.clear();
        self.delivery.spawn_timer = self.delivery.spawn_interval;
        self.delivery.successful = 0;
        self.delivery.score = 0;
        self.delivery.target_score = 0;
        self.delivery.won = false;
        self.timing.phase = GamePhase::WaitingToStart;
        self.timing.paused = false;
        self.timing.countdown = self.timing.countdown_duration;
        self.timing.playing_timer = self.timing.playing_duration;
    }

    pub fn appear_counter(
        &mut self,
        kind: &Shared<CounterKind>,
        cell: Cell,
        rotation: Rotation,
    ) -> Result<Vec<Event>, ActionError> {
        let mut events: Vec<Event> = vec![];
        let holder = self.holding.holders_id.introduce().one(HolderId);
        let create_holder = self
            .holding
            .create_holder(holder, HolderRole::Counter, cell.position())?;
        events.push(create_holder().into());

        let mut stove = None;
        let mut dispenser = None;
        match kind.capability {
            Capability::Stove => {
                let id = self.cooking.stoves_id.introduce().one(StoveId);
                let create_stove = self.cooking.create_stove(id)?;
                events.push(create_stove().into());
                stove = Some(id);
            }
            Capability::Plates => {
                let id = self.plating.dispensers_id.introduce().one(DispenserId);
                let settings = &self.config.plates;
                let create_dispenser =
                    self.plating
                        .create_dispenser(id, settings.capacity, settings.interval)?;
                events.push(create_dispenser().into());
                dispenser = Some(id);
            }
            _ => {}
        }

        let entity = Counter {
            id: self.universe.counters_id.one(CounterId),
            key: kind.id,
            holder,
            cell,
            rotation,
            stove,
            dispenser,
        };
        self.universe.counters.push(entity);
        self.universe.sweep.occupied.insert(cell);
        events.push(vec![self.look_at_counter(entity)].into());
        Ok(events)
    }

    pub fn appear_wall(&mut self, cell: Cell, rotation: Rotation, corner: bool) -> Universe {
        let entity = Wall {
            cell,
            rotation,
            corner,
        };
        self.universe.walls.push(entity);
        self.universe.sweep.occupied.insert(cell);
        Universe::WallAppeared { entity }
    }

    pub fn appear_chef(&mut self, position: Position) -> Result<Vec<Event>, ActionError> {
        let holder = self.holding.holders_id.introduce().one(HolderId);
        let create_holder = self
            .holding
            .create_holder(holder, HolderRole::Chef, position)?;
        let entity = Chef {
            holder,
            position,
            facing: Rotation::North.direction(),
            input: [0.0, 0.0],
            selected: None,
        };
        let events = occur![create_holder(), vec![Universe::ChefAppeared { entity }]];
        self.universe.chef = Some(entity);
        Ok(events)
    }
}
