pub type Position = [f32; 2];

pub type Cell = [i32; 2];

pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn mul(self, scalar: f32) -> Self;
    fn div(self, scalar: f32) -> Self;
    fn dot(self, other: Self) -> f32;
    fn distance(self, other: Self) -> f32;
    fn length(self) -> f32;
    fn normalize(self) -> Self;
    fn is_zero(self) -> bool;
    fn to_cell(self) -> Cell;
}

impl VectorMath for [f32; 2] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1]]
    }

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        [self[0] * scalar, self[1] * scalar]
    }

    #[inline]
    fn div(self, scalar: f32) -> Self {
        [self[0] / scalar, self[1] / scalar]
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self[0] * other[0] + self[1] * other[1]
    }

    fn distance(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            [0.0, 0.0]
        } else {
            self.div(length)
        }
    }

    #[inline]
    fn is_zero(self) -> bool {
        self[0] == 0.0 && self[1] == 0.0
    }

    /// Cells are unit squares centered at integer coordinates.
    #[inline]
    fn to_cell(self) -> Cell {
        [self[0].round() as i32, self[1].round() as i32]
    }
}

pub trait CellMath {
    fn position(self) -> Position;
    fn within(self, grid: [usize; 2]) -> bool;
}

impl CellMath for Cell {
    #[inline]
    fn position(self) -> Position {
        [self[0] as f32, self[1] as f32]
    }

    fn within(self, grid: [usize; 2]) -> bool {
        self[0] >= 0 && self[1] >= 0 && (self[0] as usize) < grid[0] && (self[1] as usize) < grid[1]
    }
}
