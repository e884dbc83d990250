use crate::cooking::Cooking::{
    BurnWarning, BurningCompleted, FryingCompleted, StoveProgressChanged, StoveStateChanged,
};
use crate::cooking::{Cooking, CookingDomain, CookingState};

impl CookingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Cooking> {
        let mut events = vec![];
        let threshold = self.warning_threshold;
        for stove in self.stoves.iter_mut() {
            match stove.state {
                CookingState::Idle | CookingState::Burned => continue,
                CookingState::Frying => {
                    let frying = match &stove.frying {
                        Some(frying) => frying.clone(),
                        None => continue,
                    };
                    stove.progress += time;
                    if stove.progress >= frying.duration {
                        stove.progress = 0.0;
                        stove.state = CookingState::Fried;
                        events.push(FryingCompleted {
                            stove: stove.id,
                            output: frying.output,
                        });
                        events.push(StoveStateChanged {
                            stove: stove.id,
                            state: stove.state,
                        });
                    }
                }
                CookingState::Fried => {
                    let burning = match &stove.burning {
                        Some(burning) => burning.clone(),
                        None => continue,
                    };
                    stove.progress += time;
                    if stove.progress >= burning.duration {
                        stove.progress = 0.0;
                        stove.state = CookingState::Burned;
                        events.push(BurningCompleted {
                            stove: stove.id,
                            output: burning.output,
                        });
                        events.push(StoveStateChanged {
                            stove: stove.id,
                            state: stove.state,
                        });
                    } else if !stove.warned && stove.normalized_progress() >= threshold {
                        stove.warned = true;
                        events.push(BurnWarning { stove: stove.id });
                    }
                }
            }
            events.push(StoveProgressChanged {
                stove: stove.id,
                progress: stove.normalized_progress(),
            });
        }
        events
    }
}
