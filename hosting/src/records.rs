use datamap::{Preferences, RankBook};
use kitchen::api::Event;
use kitchen::delivery::Delivery;
use kitchen::timing::{GameMode, GamePhase, Timing};
use log::{error, info};

use crate::Subscriber;

/// Persists level progress and ranking as game session goes.
pub struct RecordKeeper {
    mode: GameMode,
    preferences: Preferences,
    ranking: RankBook,
    dishes: u32,
    score: u32,
}

impl RecordKeeper {
    pub fn new(mode: GameMode, preferences: Preferences, ranking: RankBook) -> Self {
        Self {
            mode,
            preferences,
            ranking,
            dishes: 0,
            score: 0,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn ranking(&self) -> &RankBook {
        &self.ranking
    }

    fn on_game_won(&mut self, score: u32) {
        info!("Level won with score {}", score);
        let result = self
            .preferences
            .set_current_level_score(score)
            .and_then(|_| self.preferences.current_level())
            .and_then(|level| self.preferences.set_current_level(level + 1))
            .and_then(|_| self.preferences.update_highest_score(score));
        match result {
            Ok(true) => info!("New highest score {}", score),
            Ok(false) => {}
            Err(error) => error!("Unable to save level progress, {:?}", error),
        }
    }

    fn on_game_over(&mut self) {
        let result = match self.mode {
            GameMode::Casual => self.ranking.add_casual(self.dishes),
            GameMode::Challenging => self.ranking.add_challenging(self.score),
        };
        if let Err(error) = result {
            error!("Unable to save rank record, {:?}", error);
        }
    }
}

impl Subscriber for RecordKeeper {
    fn handle(&mut self, event: &Event) {
        match event {
            Event::Delivery(events) => {
                for event in events {
                    match event {
                        Delivery::DeliverySucceeded { .. } => self.dishes += 1,
                        Delivery::ScoreChanged { score } => self.score = *score,
                        Delivery::GameWon { score, .. } => self.on_game_won(*score),
                        _ => {}
                    }
                }
            }
            Event::Timing(events) => {
                for event in events {
                    match event {
                        Timing::PhaseChanged {
                            phase: GamePhase::CountdownToStart,
                        } => {
                            self.dishes = 0;
                            self.score = 0;
                        }
                        Timing::PhaseChanged {
                            phase: GamePhase::Over,
                        } => self.on_game_over(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}
