use crate::delivery::Delivery::{GameWon, ScoreChanged, TargetScoreChanged};
use crate::delivery::{Delivery, DeliveryDomain, DeliveryError};
use log::info;

impl DeliveryDomain {
    /// Accumulates points, winning once target is reached.
    pub fn add_score(
        &mut self,
        points: u32,
    ) -> Result<impl FnOnce() -> Vec<Delivery> + '_, DeliveryError> {
        let command = move || {
            self.score += points;
            let mut events = vec![ScoreChanged { score: self.score }];
            if !self.won && self.target_score > 0 && self.score >= self.target_score {
                info!(
                    "Target score {} reached with {}",
                    self.target_score, self.score
                );
                self.won = true;
                events.push(GameWon {
                    score: self.score,
                    target: self.target_score,
                });
            }
            events
        };
        Ok(command)
    }

    pub fn set_target_score(&mut self, target: u32) -> Vec<Delivery> {
        self.target_score = target;
        vec![TargetScoreChanged { target }]
    }
}
