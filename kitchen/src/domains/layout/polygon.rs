use std::f32::consts::PI;

use log::warn;
use rand::Rng;

use crate::layout::{classify_cells, Boundary, BoundaryBuilder, PolygonSettings, Rotation};
use crate::math::{
    fill_line, ordered_bounds, sample_bounds, Cell, CellMath, Position, VectorMath,
};

/// Crossing number test.
pub fn is_point_in_polygon(point: Position, polygon: &[Position]) -> bool {
    let mut inside = false;
    if polygon.len() < 3 {
        return inside;
    }
    let [x, y] = point;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let [xi, yi] = polygon[i];
        let [xj, yj] = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Area weighted (shoelace) centroid, none for degenerate polygon.
pub fn polygon_centroid(polygon: &[Position]) -> Option<Position> {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..polygon.len() {
        let [x0, y0] = polygon[i];
        let [x1, y1] = polygon[(i + 1) % polygon.len()];
        let cross = x0 * y1 - x1 * y0;
        area += cross;
        cx += (x0 + x1) * cross;
        cy += (y0 + y1) * cross;
    }
    area *= 0.5;
    if area.abs() < f32::EPSILON {
        return None;
    }
    let factor = 1.0 / (6.0 * area);
    Some([cx * factor, cy * factor])
}

pub fn mean_point(points: &[Position]) -> Position {
    if points.is_empty() {
        return [0.0, 0.0];
    }
    let sum = points.iter().fold([0.0, 0.0], |sum, point| sum.add(*point));
    sum.div(points.len() as f32)
}

/// Orders vertices by angle around their mean so edges never cross.
pub fn sort_vertices(vertices: &mut Vec<Cell>) {
    let points: Vec<Position> = vertices.iter().map(|vertex| vertex.position()).collect();
    let [cx, cy] = mean_point(&points);
    let angle = |vertex: &Cell| (vertex[1] as f32 - cy).atan2(vertex[0] as f32 - cx);
    vertices.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
    let mut unique: Vec<Cell> = vec![];
    for vertex in vertices.iter() {
        if !unique.contains(vertex) {
            unique.push(*vertex);
        }
    }
    *vertices = unique;
}

fn inward_rotation(cell: Cell, target: Position) -> Rotation {
    let [dx, dy] = target.sub(cell.position());
    if dx.abs() >= dy.abs() {
        if dx >= 0.0 {
            Rotation::East
        } else {
            Rotation::West
        }
    } else if dy >= 0.0 {
        Rotation::North
    } else {
        Rotation::South
    }
}

fn clamp_axis(value: f32, grid: usize) -> i32 {
    let grid = grid as i32;
    let (min, max) = if grid >= 5 { (2, grid - 3) } else { (0, grid - 1) };
    (value.round() as i32).clamp(min, max.max(min))
}

fn center_axis(grid: usize, random: &mut impl Rng) -> f32 {
    let min = grid / 4;
    let max = grid * 3 / 4;
    if min < max {
        random.gen_range(min..max) as f32
    } else {
        (grid / 2) as f32
    }
}

pub fn generate_polygon(
    grid: [usize; 2],
    settings: &PolygonSettings,
    catalog_size: usize,
    random: &mut impl Rng,
) -> Boundary {
    let center = [center_axis(grid[0], random), center_axis(grid[1], random)];
    let [min_sides, max_sides] = ordered_bounds(settings.sides, "polygon sides");
    let sides = sample_bounds([min_sides.max(3), max_sides.max(3)], "polygon sides", random);

    let mut angles: Vec<f32> = (0..sides).map(|_| random.gen_range(0.0f32..360.0)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    let [min_length, max_length] = ordered_bounds(settings.side_length, "polygon side length");
    let radius = sample_bounds([min_length * 0.8, max_length * 1.2], "polygon radius", random);

    let mut vertices: Vec<Cell> = vec![];
    for angle in angles {
        let jitter = radius * random.gen_range(0.8f32..1.2);
        let radians = angle * PI / 180.0;
        let x = center[0] + jitter * radians.cos();
        let y = center[1] + jitter * radians.sin();
        vertices.push([clamp_axis(x, grid[0]), clamp_axis(y, grid[1])]);
    }
    sort_vertices(&mut vertices);
    if vertices.len() < 3 {
        warn!(
            "Polygon collapsed to {} vertices after clamping into grid {:?}",
            vertices.len(),
            grid
        );
    }

    let mut builder = BoundaryBuilder::new(grid);
    for i in 0..vertices.len() {
        let start = vertices[i];
        let end = vertices[(i + 1) % vertices.len()];
        for cell in fill_line(start, end) {
            builder.add(cell, Rotation::North);
        }
    }
    let mut cells = builder.build();

    let polygon: Vec<Position> = vertices.iter().map(|vertex| vertex.position()).collect();
    let middle = mean_point(&polygon);
    let spawn = if is_point_in_polygon(middle, &polygon) {
        middle
    } else {
        warn!(
            "Polygon center {:?} is outside of polygon, area centroid used",
            middle
        );
        polygon_centroid(&polygon).unwrap_or(middle)
    };

    for cell in cells.iter_mut() {
        cell.rotation = inward_rotation(cell.cell, spawn);
    }
    let count = cells.len();
    let share = (count as f32 * settings.non_interactive_share).round() as usize;
    let non_interactive = settings.min_non_interactive.max(share).min(count);
    classify_cells(&mut cells, &vertices, non_interactive, catalog_size, random);

    Boundary {
        cells,
        vertices,
        center: middle,
        spawn,
    }
}
