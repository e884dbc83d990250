use log::warn;
use rand::Rng;

use crate::layout::{classify_cells, Boundary, BoundaryBuilder, RectangleSettings, Rotation};
use crate::math::{sample_bounds, Cell};

/// Largest side which still leaves one cell margin on both sides.
fn fit_side(side: usize, grid: usize, axis: &str) -> usize {
    let max = grid.saturating_sub(2).max(1);
    if side > max {
        warn!(
            "Rectangle {} {} does not fit into grid {}, shrunk to {}",
            axis, side, grid, max
        );
        max
    } else {
        side.max(1)
    }
}

pub fn generate_rectangle(
    grid: [usize; 2],
    settings: &RectangleSettings,
    catalog_size: usize,
    random: &mut impl Rng,
) -> Boundary {
    let width = sample_bounds(settings.width, "rectangle width", random);
    let width = fit_side(width, grid[0], "width");
    let height = sample_bounds(settings.height, "rectangle height", random);
    let height = fit_side(height, grid[1], "height");
    let max_x = (grid[0] as i32 - width as i32 - 1).max(1);
    let max_y = (grid[1] as i32 - height as i32 - 1).max(1);
    let x = random.gen_range(1..=max_x);
    let y = random.gen_range(1..=max_y);
    let w = width as i32;
    let h = height as i32;

    let mut builder = BoundaryBuilder::new(grid);
    for i in 0..w {
        builder.add([x + i, y], Rotation::North);
    }
    for i in 0..w {
        builder.add([x + i, y + h - 1], Rotation::South);
    }
    for j in 1..h - 1 {
        builder.add([x, y + j], Rotation::East);
    }
    for j in 1..h - 1 {
        builder.add([x + w - 1, y + j], Rotation::West);
    }
    let mut cells = builder.build();

    let mut corners: Vec<Cell> = vec![];
    for corner in [
        [x, y],
        [x + w - 1, y],
        [x + w - 1, y + h - 1],
        [x, y + h - 1],
    ] {
        if !corners.contains(&corner) {
            corners.push(corner);
        }
    }

    let count = cells.len();
    let non_interactive = sample_bounds(settings.non_interactive, "non interactive cells", random)
        .max(4)
        .min(count / 2);
    classify_cells(&mut cells, &corners, non_interactive, catalog_size, random);

    let center = [
        x as f32 + width as f32 / 2.0 - 0.5,
        y as f32 + height as f32 / 2.0 - 0.5,
    ];
    Boundary {
        cells,
        vertices: corners,
        center,
        spawn: center,
    }
}
