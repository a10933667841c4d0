//! Accessibility regions.
//!
//! A region is a pure predicate over [`Cell`]s plus the rectangle it lives in.
//! The rectangle bounds random sampling and path search; the predicate decides
//! which cells inside it are walkable.  Cells outside the rectangle are never
//! accessible.

use roam_core::Cell;

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Half-open rectangle `[0, width) × [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Number of cells, or zero for a degenerate rectangle.
    #[inline]
    pub fn area(self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Row-major index of `cell`, or `None` outside the rectangle.
    #[inline]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }
}

// ── Region trait ──────────────────────────────────────────────────────────────

/// Walkable area of the grid.
///
/// Implementations must be deterministic and side-effect-free: the movement
/// code samples and searches against the same region for the whole session
/// and assumes the answer for a cell never changes.
pub trait Region {
    /// The rectangle every accessible cell lies in.
    fn bounds(&self) -> Bounds;

    /// `true` if a student may stand on `cell`.  Must return `false` (not
    /// panic) for any cell outside [`bounds`](Self::bounds).
    fn is_accessible(&self, cell: Cell) -> bool;

    /// Every cell of the bounding rectangle, row by row.
    fn cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let Bounds { width, height } = self.bounds();
        Box::new(
            (0..height.max(0))
                .flat_map(move |y| (0..width.max(0)).map(move |x| Cell::new(x, y))),
        )
    }

    /// `true` if at least one cell is accessible.  O(area).
    fn has_accessible_cell(&self) -> bool {
        self.cells().any(|c| self.is_accessible(c))
    }
}

/// Row-major walkability of every cell in `region`'s bounds.
///
/// Used by presentation layers to draw a valid-spot overlay.
pub fn accessibility_mask<R: Region + ?Sized>(region: &R) -> Vec<bool> {
    region.cells().map(|c| region.is_accessible(c)).collect()
}

// ── CarvedRect ────────────────────────────────────────────────────────────────

/// Rectangular notch removed from the top-right of a [`CarvedRect`].
///
/// Cells with `x >= from_x` and `y <= up_to_y` are blocked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carve {
    pub from_x: i32,
    pub up_to_y: i32,
}

/// A `width × height` rectangle with an optional top-right notch.
///
/// With a carve the walkable area is an L: the full-height left block
/// (`x < from_x`) plus the full-width bottom band (`y > up_to_y`).
///
/// ```
/// use roam_core::Cell;
/// use roam_grid::{CarvedRect, Region};
///
/// let campus = CarvedRect::campus();
/// assert!(campus.is_accessible(Cell::new(0, 0)));
/// assert!(!campus.is_accessible(Cell::new(8, 1)));  // inside the notch
/// assert!(campus.is_accessible(Cell::new(8, 4)));   // bottom band
/// assert!(!campus.is_accessible(Cell::new(10, 4))); // out of range
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarvedRect {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub carve: Option<Carve>,
}

impl CarvedRect {
    /// Plain rectangle with no notch.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, carve: None }
    }

    pub fn with_carve(mut self, from_x: i32, up_to_y: i32) -> Self {
        self.carve = Some(Carve { from_x, up_to_y });
        self
    }

    /// The 10 × 5 campus courtyard: a building occupies columns 6.. of rows
    /// 0..=2.
    pub fn campus() -> Self {
        Self::new(10, 5).with_carve(6, 2)
    }
}

impl Default for CarvedRect {
    fn default() -> Self {
        Self::campus()
    }
}

impl Region for CarvedRect {
    #[inline]
    fn bounds(&self) -> Bounds {
        Bounds { width: self.width, height: self.height }
    }

    #[inline]
    fn is_accessible(&self, cell: Cell) -> bool {
        self.bounds().contains(cell)
            && match self.carve {
                Some(Carve { from_x, up_to_y }) => cell.x < from_x || cell.y > up_to_y,
                None => true,
            }
    }
}
