//! Flat, index-addressed cell storage.
//!
//! [`CellGrid`] is pure storage: it maps flat indices to cell records and has
//! no notion of rows, columns, or regions. Coordinate arithmetic and all
//! game-rule guarding (bounds, value ranges, given-locking) happen one layer
//! up in [`Board`](crate::Board), which exclusively owns the grid.

/// A single cell record: a value and a given-flag.
///
/// A value of `0` denotes a blank cell. The given-flag marks a cell whose
/// value was fixed at puzzle setup and may never be overwritten by the
/// player; it transitions `false → true` exactly once, in bulk, when the
/// board locks its givens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    value: usize,
    given: bool,
}

impl Cell {
    /// Returns the stored value (`0` means blank).
    #[must_use]
    pub const fn value(&self) -> usize {
        self.value
    }

    /// Returns `true` if this cell is a puzzle given.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        self.given
    }
}

/// Indexed storage for a fixed number of cells.
///
/// All accessors take a flat index; staying within `0..len` is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// use gridlock_core::grid::CellGrid;
///
/// let mut grid = CellGrid::new(16);
/// assert_eq!(grid.value(7), 0);
///
/// grid.set_value(7, 3);
/// assert_eq!(grid.value(7), 3);
/// assert!(!grid.is_given(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Creates a grid of `len` blank, non-given cells.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Cell::default(); len],
        }
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value stored at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn value(&self, idx: usize) -> usize {
        self.cells[idx].value
    }

    /// Overwrites the value at `idx` unconditionally.
    ///
    /// Given-protection is enforced by the board, not here.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn set_value(&mut self, idx: usize, val: usize) {
        self.cells[idx].value = val;
    }

    /// Returns the given-flag of the cell at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn is_given(&self, idx: usize) -> bool {
        self.cells[idx].given
    }

    /// Sets the given-flag of the cell at `idx`. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn set_given(&mut self, idx: usize) {
        self.cells[idx].given = true;
    }
}
