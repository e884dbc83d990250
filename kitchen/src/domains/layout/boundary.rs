use std::collections::HashSet;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::layout::{BoundaryCell, CellClass, Distribution, Rotation};
use crate::math::{Cell, CellMath};

/// Collects unique in-grid boundary cells preserving insertion order.
pub struct BoundaryBuilder {
    grid: [usize; 2],
    cells: Vec<BoundaryCell>,
    index: HashSet<Cell>,
}

impl BoundaryBuilder {
    pub fn new(grid: [usize; 2]) -> Self {
        Self {
            grid,
            cells: vec![],
            index: HashSet::new(),
        }
    }

    pub fn add(&mut self, cell: Cell, rotation: Rotation) -> bool {
        if !cell.within(self.grid) {
            warn!(
                "Boundary cell {:?} is outside of grid {:?}, dropped",
                cell, self.grid
            );
            return false;
        }
        if !self.index.insert(cell) {
            return false;
        }
        self.cells.push(BoundaryCell {
            cell,
            class: CellClass::Interactive,
            rotation,
            prefab: None,
        });
        true
    }

    pub fn build(self) -> Vec<BoundaryCell> {
        self.cells
    }
}

/// Marks corners, picks random non-interactive cells until `non_interactive`
/// reached and assigns prefab indices to the rest.
pub fn classify_cells(
    cells: &mut [BoundaryCell],
    corners: &[Cell],
    non_interactive: usize,
    catalog_size: usize,
    random: &mut impl Rng,
) {
    let mut candidates = vec![];
    for (index, cell) in cells.iter_mut().enumerate() {
        if corners.contains(&cell.cell) {
            cell.class = CellClass::Corner;
            cell.rotation = Rotation::North;
        } else {
            candidates.push(index);
        }
    }
    let corners_count = cells.len() - candidates.len();
    let required = non_interactive.saturating_sub(corners_count);
    candidates.shuffle(random);
    for index in candidates.iter().take(required) {
        cells[*index].class = CellClass::NonInteractive;
    }

    if catalog_size == 0 {
        warn!("Prefab catalog is empty, interactive cells left without prefab");
    }
    let mut distribution = Distribution::new(catalog_size, random);
    for cell in cells.iter_mut() {
        if cell.class == CellClass::Interactive {
            cell.prefab = distribution.draw(random);
        }
    }
}
