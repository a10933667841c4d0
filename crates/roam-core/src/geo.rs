//! Grid cells and continuous positions.
//!
//! `Cell` is the discrete unit the accessibility predicate and the path
//! oracle work in.  `Point` is where an agent actually is: waypoints carry
//! jitter and segment interpolation produces fractional positions.  Both use
//! the same axes; `y` grows downward, so a larger `y` is drawn later.

/// A discrete grid cell.  Compared by value only.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent cells, in a fixed order (E, W, S, N).
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        [
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x, self.y - 1),
        ]
    }

    /// The four edge-adjacent cells followed by the four diagonal ones
    /// (SE, SW, NE, NW).
    #[inline]
    pub fn neighbors8(self) -> [Cell; 8] {
        let [e, w, s, n] = self.neighbors4();
        [
            e,
            w,
            s,
            n,
            Cell::new(self.x + 1, self.y + 1),
            Cell::new(self.x - 1, self.y + 1),
            Cell::new(self.x + 1, self.y - 1),
            Cell::new(self.x - 1, self.y - 1),
        ]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A continuous position in grid units.
///
/// Single precision is plenty: the campus is a handful of cells wide and the
/// values only feed interpolation and draw order.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t` is not clamped: values above 1 extrapolate past `other`, which the
    /// movement code relies on between an overshooting advance and the next
    /// path reconciliation.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// The cell containing this point (component-wise floor).
    #[inline]
    pub fn floor_cell(self) -> Cell {
        Cell::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Shift vertically by `dy`.
    #[inline]
    pub fn offset_y(self, dy: f32) -> Point {
        Point { x: self.x, y: self.y + dy }
    }
}

impl From<Cell> for Point {
    #[inline]
    fn from(c: Cell) -> Point {
        Point::new(c.x as f32, c.y as f32)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
