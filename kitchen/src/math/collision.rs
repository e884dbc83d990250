use crate::math::{Cell, CellMath, Position, VectorMath};
use std::collections::HashSet;

#[inline]
pub fn test_rect_collision(
    a: Position,
    a_bounds: [f32; 2],
    b: Position,
    b_bounds: [f32; 2],
) -> bool {
    let [aw, ah] = a_bounds;
    let [ax, ay] = a.sub(a_bounds.mul(0.5));
    let [bw, bh] = b_bounds;
    let [bx, by] = b.sub(b_bounds.mul(0.5));
    (ax + aw > bx && bx + bw > ax) && (ay + ah > by && by + bh > ay)
}

/// Collision query used by chef movement.
pub trait Sweep {
    fn is_free(&self, position: Position, bounds: [f32; 2]) -> bool;
}

/// Every occupied cell blocks as a unit square.
#[derive(Default)]
pub struct GridSweep {
    pub occupied: HashSet<Cell>,
}

impl Sweep for GridSweep {
    fn is_free(&self, position: Position, bounds: [f32; 2]) -> bool {
        let center = position.to_cell();
        for x in -1..=1 {
            for y in -1..=1 {
                let cell = [center[0] + x, center[1] + y];
                if self.occupied.contains(&cell)
                    && test_rect_collision(position, bounds, cell.position(), [1.0, 1.0])
                {
                    return false;
                }
            }
        }
        true
    }
}

/// Moves body along direction. When blocked slides along x-only,
/// then y-only component.
pub fn sweep_move(
    sweep: &impl Sweep,
    position: Position,
    bounds: [f32; 2],
    direction: Position,
    distance: f32,
) -> Option<Position> {
    let direction = direction.normalize();
    if direction.is_zero() || distance <= 0.0 {
        return None;
    }
    let candidates = [
        direction,
        [direction[0], 0.0].normalize(),
        [0.0, direction[1]].normalize(),
    ];
    for candidate in candidates {
        if candidate.is_zero() {
            continue;
        }
        let destination = position.add(candidate.mul(distance));
        if sweep.is_free(destination, bounds) {
            return Some(destination);
        }
    }
    None
}
