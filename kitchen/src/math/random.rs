use std::fmt::Debug;

use log::warn;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Orders configured bounds, reversed ones are swapped with a warning.
pub fn ordered_bounds<T>(bounds: [T; 2], name: &str) -> [T; 2]
where
    T: PartialOrd + Copy + Debug,
{
    let [min, max] = bounds;
    if min > max {
        warn!("Reversed {} bounds {:?}, swapped", name, bounds);
        [max, min]
    } else {
        [min, max]
    }
}

/// Uniform value within configured bounds, inclusive on both ends.
pub fn sample_bounds<T>(bounds: [T; 2], name: &str, random: &mut impl Rng) -> T
where
    T: SampleUniform + PartialOrd + Copy + Debug,
{
    let [min, max] = ordered_bounds(bounds, name);
    if !(min < max) {
        return min;
    }
    random.gen_range(min..=max)
}
