use crate::math::{Cell, Position, VectorMath};

/// Rasterizes segment with constant step count `max(|dx|, |dy|)`, rounding
/// every intermediate point. Both ends are included.
pub fn fill_line(start: Cell, end: Cell) -> Vec<Cell> {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![start];
    }
    let mut cells = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = start[0] as f32 + dx as f32 * t;
        let y = start[1] as f32 + dy as f32 * t;
        cells.push([x.round() as i32, y.round() as i32]);
    }
    cells
}

/// Cells crossed by a ray of given length, in hit order, excluding origin cell.
pub fn cast_ray(start: Position, direction: Position, distance: f32) -> Vec<Cell> {
    const STEP: f32 = 0.1;
    let direction = direction.normalize();
    let origin = start.to_cell();
    let mut cells: Vec<Cell> = vec![];
    if direction.is_zero() {
        return cells;
    }
    let steps = (distance / STEP).ceil() as usize;
    for i in 1..=steps {
        let point = start.add(direction.mul((i as f32 * STEP).min(distance)));
        let cell = point.to_cell();
        if cell != origin && cells.last() != Some(&cell) {
            cells.push(cell);
        }
    }
    cells
}
