use rand::Rng;
use serde::Deserialize;

use crate::math::sample_bounds;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreSettings {
    pub per_cell: u32,
    pub base_offset: u32,
    pub factor: [f32; 2],
    pub increment: [u32; 2],
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            per_cell: 2,
            base_offset: 10,
            factor: [0.8, 1.2],
            increment: [10, 30],
        }
    }
}

/// Target score of next level derived from its boundary size.
pub fn generate_target_score(
    previous: u32,
    cells: usize,
    settings: &ScoreSettings,
    random: &mut impl Rng,
) -> u32 {
    let base = cells as f32 * settings.per_cell as f32 + settings.base_offset as f32;
    let factor = sample_bounds(settings.factor, "target score factor", random);
    let increment = sample_bounds(settings.increment, "target score increment", random);
    (previous as f32 + base * factor + increment as f32).round() as u32
}
