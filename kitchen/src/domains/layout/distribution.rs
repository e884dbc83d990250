use rand::seq::SliceRandom;
use rand::Rng;

/// Hands out catalog indices in shuffled order, reshuffling once every index was used.
pub struct Distribution {
    order: Vec<usize>,
    cursor: usize,
}

impl Distribution {
    pub fn new(size: usize, random: &mut impl Rng) -> Self {
        let mut order: Vec<usize> = (0..size).collect();
        order.shuffle(random);
        Self { order, cursor: 0 }
    }

    pub fn draw(&mut self, random: &mut impl Rng) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        if self.cursor >= self.order.len() {
            self.order.shuffle(random);
            self.cursor = 0;
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        Some(index)
    }
}
