use serde::Deserialize;

use crate::math::{Cell, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Corner,
    NonInteractive,
    Interactive,
}

/// Inward facing of boundary cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn direction(&self) -> Position {
        match self {
            Rotation::North => [0.0, 1.0],
            Rotation::East => [1.0, 0.0],
            Rotation::South => [0.0, -1.0],
            Rotation::West => [-1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCell {
    pub cell: Cell,
    pub class: CellClass,
    pub rotation: Rotation,
    pub prefab: Option<usize>,
}

impl BoundaryCell {
    #[inline]
    pub fn is_non_interactive(&self) -> bool {
        self.class != CellClass::Interactive
    }
}

#[derive(Debug, Clone)]
pub struct Boundary {
    pub cells: Vec<BoundaryCell>,
    pub vertices: Vec<Cell>,
    pub center: Position,
    pub spawn: Position,
}

impl Boundary {
    pub fn corners(&self) -> impl Iterator<Item = &BoundaryCell> {
        self.cells
            .iter()
            .filter(|cell| cell.class == CellClass::Corner)
    }

    /// Corners included.
    pub fn non_interactive(&self) -> impl Iterator<Item = &BoundaryCell> {
        self.cells.iter().filter(|cell| cell.is_non_interactive())
    }

    pub fn interactive(&self) -> impl Iterator<Item = &BoundaryCell> {
        self.cells.iter().filter(|cell| !cell.is_non_interactive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Shape {
    Rectangle,
    Polygon,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RectangleSettings {
    pub width: [usize; 2],
    pub height: [usize; 2],
    pub non_interactive: [usize; 2],
}

impl Default for RectangleSettings {
    fn default() -> Self {
        Self {
            width: [10, 20],
            height: [10, 20],
            non_interactive: [6, 10],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolygonSettings {
    pub sides: [usize; 2],
    pub side_length: [f32; 2],
    pub non_interactive_share: f32,
    pub min_non_interactive: usize,
}

impl Default for PolygonSettings {
    fn default() -> Self {
        Self {
            sides: [4, 8],
            side_length: [5.0, 12.0],
            non_interactive_share: 0.2,
            min_non_interactive: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub grid: [usize; 2],
    pub shape: Shape,
    pub rectangle: RectangleSettings,
    pub polygon: PolygonSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid: [40, 40],
            shape: Shape::Rectangle,
            rectangle: RectangleSettings::default(),
            polygon: PolygonSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    BoundaryGenerated {
        cells: usize,
        corners: usize,
        non_interactive: usize,
        center: Position,
        spawn: Position,
    },
}

#[derive(Default)]
pub struct LayoutDomain {
    pub settings: LayoutSettings,
    pub boundary: Option<Boundary>,
}
