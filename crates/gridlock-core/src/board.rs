//! The Sudoku board: coordinate translation, region partitioning, mutation
//! guarding, and per-unit state evaluation.

use std::fmt::{self, Display};

use crate::{BoardError, Unit, UnitState, grid::CellGrid};

/// A variable-size Sudoku board.
///
/// The board is parameterized by the shape of its regions: with regions of
/// `rows × columns` cells, the board side is `size = rows * columns` and the
/// board holds `size²` cells. A classic puzzle is `Board::new(3, 3)`; a 6×6
/// puzzle with 2×3 regions is `Board::new(2, 3)`.
///
/// Cells hold values in `0..=size`, where `0` denotes a blank. Cells whose
/// values are locked as puzzle givens reject all further writes.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, UnitState};
///
/// let mut board = Board::new(3, 3);
/// assert_eq!(board.size(), 9);
///
/// board.set_value(4, 4, 7).unwrap();
/// assert_eq!(board.value(4, 4), Ok(7));
/// assert_eq!(board.row_state(4), Ok(UnitState::Incomplete));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    size: usize,
    grid: CellGrid,
}

impl Board {
    /// Creates a blank board with regions of `rows × columns` cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows >= 1 && columns >= 1,
            "Region dimensions must be at least 1x1, got {rows}x{columns}"
        );
        let size = rows * columns;
        Self {
            rows,
            columns,
            size,
            grid: CellGrid::new(size * size),
        }
    }

    /// Returns the number of rows in one region.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in one region.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the side length of the board, `rows * columns`.
    ///
    /// This is also the number of rows, of columns, and of regions, and the
    /// largest legal cell value.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Translates `(row, column)` into a flat row-major index.
    fn index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= self.size || column >= self.size {
            return Err(BoardError::OutOfBounds);
        }
        Ok(row * self.size + column)
    }

    /// Enumerates, in row-major order, the flat indices of the inclusive
    /// rectangle `start_row..=end_row` × `start_column..=end_column`.
    ///
    /// Bounds are the caller's responsibility.
    fn rect_indices(
        &self,
        start_row: usize,
        end_row: usize,
        start_column: usize,
        end_column: usize,
    ) -> impl Iterator<Item = usize> {
        let size = self.size;
        (start_row..=end_row)
            .flat_map(move |r| (start_column..=end_column).map(move |c| r * size + c))
    }

    /// Row and column spans of region `n`, as inclusive bounds.
    ///
    /// Regions tile the board in bands of `rows` board-rows, `rows` regions
    /// per band, each region `rows × columns` cells.
    fn region_bounds(&self, n: usize) -> (usize, usize, usize, usize) {
        let start_row = (n / self.rows) * self.rows;
        let start_column = (n % self.rows) * self.columns;
        (
            start_row,
            start_row + self.rows - 1,
            start_column,
            start_column + self.columns - 1,
        )
    }

    /// Evaluates one index set.
    ///
    /// A duplicated non-blank value wins over any blanks in the same set.
    fn state_of(&self, indices: impl Iterator<Item = usize>) -> UnitState {
        let mut seen = vec![false; self.size + 1];
        let mut blank = false;
        for idx in indices {
            let value = self.grid.value(idx);
            if value == 0 {
                blank = true;
            } else if seen[value] {
                return UnitState::Conflict;
            } else {
                seen[value] = true;
            }
        }
        if blank {
            UnitState::Incomplete
        } else {
            UnitState::Complete
        }
    }

    /// Returns the value of the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is outside
    /// `0..size`.
    pub fn value(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        Ok(self.grid.value(self.index(row, column)?))
    }

    /// Returns `true` if the cell at `(row, column)` is a puzzle given.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is outside
    /// `0..size`.
    pub fn is_given(&self, row: usize, column: usize) -> Result<bool, BoardError> {
        Ok(self.grid.is_given(self.index(row, column)?))
    }

    /// Stores `val` at `(row, column)`. `0` clears the cell.
    ///
    /// This is the only mutation path exposed to players; a failed call
    /// leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidValue`] if `val > size`,
    /// [`BoardError::OutOfBounds`] if either coordinate is outside
    /// `0..size`, and [`BoardError::GivenLocked`] if the target cell is a
    /// locked given.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Board, BoardError};
    ///
    /// let mut board = Board::new(2, 2);
    /// board.set_value(0, 0, 4).unwrap();
    /// assert_eq!(
    ///     board.set_value(0, 0, 5),
    ///     Err(BoardError::InvalidValue { value: 5 })
    /// );
    /// assert_eq!(board.value(0, 0), Ok(4));
    /// ```
    pub fn set_value(&mut self, row: usize, column: usize, val: usize) -> Result<(), BoardError> {
        if val > self.size {
            return Err(BoardError::InvalidValue { value: val });
        }
        let idx = self.index(row, column)?;
        if self.grid.is_given(idx) {
            return Err(BoardError::GivenLocked { row, column });
        }
        self.grid.set_value(idx, val);
        Ok(())
    }

    /// Locks every non-blank cell as a puzzle given.
    ///
    /// Called once per session when entered values become the puzzle; the
    /// transition is irreversible within the model. Blank cells are left
    /// unlocked.
    pub fn fix_givens(&mut self) {
        for idx in 0..self.grid.len() {
            if self.grid.value(idx) != 0 {
                self.grid.set_given(idx);
            }
        }
    }

    /// Evaluates a unit whose index is already known to be in range.
    fn state_of_unit(&self, unit: Unit) -> UnitState {
        match unit {
            Unit::Row { n } => self.state_of(self.rect_indices(n, n, 0, self.size - 1)),
            Unit::Column { n } => self.state_of(self.rect_indices(0, self.size - 1, n, n)),
            Unit::Region { n } => {
                let (start_row, end_row, start_column, end_column) = self.region_bounds(n);
                self.state_of(self.rect_indices(start_row, end_row, start_column, end_column))
            }
        }
    }

    /// Returns the state of row `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `n` is outside `0..size`.
    pub fn row_state(&self, n: usize) -> Result<UnitState, BoardError> {
        self.unit_state(Unit::Row { n })
    }

    /// Returns the state of column `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `n` is outside `0..size`.
    pub fn column_state(&self, n: usize) -> Result<UnitState, BoardError> {
        self.unit_state(Unit::Column { n })
    }

    /// Returns the state of region `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `n` is outside `0..size`.
    pub fn region_state(&self, n: usize) -> Result<UnitState, BoardError> {
        self.unit_state(Unit::Region { n })
    }

    /// Returns the state of an arbitrary [`Unit`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the unit's index is outside
    /// `0..size`.
    pub fn unit_state(&self, unit: Unit) -> Result<UnitState, BoardError> {
        let (Unit::Row { n } | Unit::Column { n } | Unit::Region { n }) = unit;
        if n >= self.size {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.state_of_unit(unit))
    }

    /// Iterates every unit of the board paired with its evaluated state:
    /// all rows, then all columns, then all regions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Board;
    ///
    /// let board = Board::new(2, 2);
    /// assert!(
    ///     board
    ///         .unit_states()
    ///         .all(|(_, state)| state.is_incomplete())
    /// );
    /// ```
    pub fn unit_states(&self) -> impl Iterator<Item = (Unit, UnitState)> {
        Unit::all(self.size).map(move |unit| (unit, self.state_of_unit(unit)))
    }
}

/// Row-by-row, space-separated dump of all values. Diagnostic use only.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..self.size {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.grid.value(row * self.size + column))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_2x2_with_region_0(values: [usize; 4]) -> Board {
        let mut board = Board::new(2, 2);
        board.set_value(0, 0, values[0]).unwrap();
        board.set_value(0, 1, values[1]).unwrap();
        board.set_value(1, 0, values[2]).unwrap();
        board.set_value(1, 1, values[3]).unwrap();
        board
    }

    #[test]
    fn test_dimensions() {
        let board = Board::new(3, 2);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.columns(), 2);
        assert_eq!(board.size(), 6);
    }

    #[test]
    #[should_panic(expected = "Region dimensions must be at least 1x1")]
    fn test_zero_dimension_rejected() {
        let _ = Board::new(0, 3);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut board = Board::new(2, 2);
        board.set_value(2, 3, 4).unwrap();
        assert_eq!(board.value(2, 3), Ok(4));
        board.set_value(2, 3, 0).unwrap();
        assert_eq!(board.value(2, 3), Ok(0));
    }

    #[test]
    fn test_value_of_size_is_legal() {
        let mut board = Board::new(2, 2);
        board.set_value(0, 0, 4).unwrap();
        assert_eq!(board.value(0, 0), Ok(4));
    }

    #[test]
    fn test_value_above_size_rejected() {
        let mut board = Board::new(2, 2);
        assert_eq!(
            board.set_value(0, 0, 5),
            Err(BoardError::InvalidValue { value: 5 })
        );
        assert_eq!(board.value(0, 0), Ok(0));
    }

    #[test]
    fn test_coordinates_out_of_bounds() {
        let mut board = Board::new(2, 2);
        assert_eq!(board.value(4, 0), Err(BoardError::OutOfBounds));
        assert_eq!(board.value(0, 4), Err(BoardError::OutOfBounds));
        assert_eq!(board.is_given(4, 4), Err(BoardError::OutOfBounds));
        assert_eq!(board.set_value(4, 0, 1), Err(BoardError::OutOfBounds));
    }

    #[test]
    fn test_unit_index_out_of_bounds() {
        let board = Board::new(2, 2);
        assert_eq!(board.row_state(4), Err(BoardError::OutOfBounds));
        assert_eq!(board.column_state(4), Err(BoardError::OutOfBounds));
        assert_eq!(board.region_state(4), Err(BoardError::OutOfBounds));
    }

    #[test]
    fn test_fix_givens_locks_only_filled_cells() {
        let mut board = Board::new(2, 2);
        board.set_value(0, 0, 1).unwrap();
        board.set_value(3, 3, 2).unwrap();
        board.fix_givens();

        assert_eq!(board.is_given(0, 0), Ok(true));
        assert_eq!(board.is_given(3, 3), Ok(true));
        assert_eq!(board.is_given(1, 1), Ok(false));

        // Locked cells reject writes and keep their value.
        assert_eq!(
            board.set_value(0, 0, 4),
            Err(BoardError::GivenLocked { row: 0, column: 0 })
        );
        assert_eq!(board.value(0, 0), Ok(1));

        // Unlocked cells are still writable.
        board.set_value(1, 1, 3).unwrap();
        assert_eq!(board.value(1, 1), Ok(3));
    }

    #[test]
    fn test_region_state_complete_incomplete_conflict() {
        let board = board_2x2_with_region_0([1, 2, 3, 4]);
        assert_eq!(board.region_state(0), Ok(UnitState::Complete));

        let board = board_2x2_with_region_0([1, 2, 3, 0]);
        assert_eq!(board.region_state(0), Ok(UnitState::Incomplete));

        let board = board_2x2_with_region_0([1, 2, 3, 1]);
        assert_eq!(board.region_state(0), Ok(UnitState::Conflict));
    }

    #[test]
    fn test_conflict_wins_over_blank() {
        // Row 0 holds a blank and a duplicate; the duplicate decides.
        let mut board = Board::new(2, 2);
        board.set_value(0, 0, 2).unwrap();
        board.set_value(0, 2, 2).unwrap();
        assert_eq!(board.row_state(0), Ok(UnitState::Conflict));
    }

    #[test]
    fn test_row_and_column_states() {
        let mut board = Board::new(2, 2);
        for c in 0..4 {
            board.set_value(1, c, c + 1).unwrap();
        }
        assert_eq!(board.row_state(1), Ok(UnitState::Complete));
        assert_eq!(board.row_state(0), Ok(UnitState::Incomplete));

        // Column 2 now holds only the 3 from row 1.
        assert_eq!(board.column_state(2), Ok(UnitState::Incomplete));
        board.set_value(0, 2, 3).unwrap();
        assert_eq!(board.column_state(2), Ok(UnitState::Conflict));
    }

    #[test]
    fn test_unit_state_dispatch() {
        let mut board = Board::new(2, 2);
        board.set_value(0, 0, 1).unwrap();
        board.set_value(0, 3, 1).unwrap();
        assert_eq!(
            board.unit_state(Unit::Row { n: 0 }),
            Ok(UnitState::Conflict)
        );
        assert_eq!(
            board.unit_state(Unit::Column { n: 0 }),
            Ok(UnitState::Incomplete)
        );
        assert_eq!(
            board.unit_state(Unit::Region { n: 4 }),
            Err(BoardError::OutOfBounds)
        );
    }

    #[test]
    fn test_region_bounds_non_square() {
        // 6x6 board, 3x2 regions: two bands of three regions each.
        let board = Board::new(3, 2);
        assert_eq!(board.region_bounds(0), (0, 2, 0, 1));
        assert_eq!(board.region_bounds(1), (0, 2, 2, 3));
        assert_eq!(board.region_bounds(2), (0, 2, 4, 5));
        assert_eq!(board.region_bounds(3), (3, 5, 0, 1));
        assert_eq!(board.region_bounds(5), (3, 5, 4, 5));
    }

    #[test]
    fn test_region_state_non_square() {
        let mut board = Board::new(3, 2);
        // Fill region 4 (rows 3-5, columns 2-3) with 1..=6.
        let mut value = 1;
        for r in 3..=5 {
            for c in 2..=3 {
                board.set_value(r, c, value).unwrap();
                value += 1;
            }
        }
        assert_eq!(board.region_state(4), Ok(UnitState::Complete));
        assert_eq!(board.region_state(0), Ok(UnitState::Incomplete));
    }

    #[test]
    fn test_display_dump() {
        let mut board = Board::new(1, 2);
        board.set_value(0, 0, 1).unwrap();
        board.set_value(1, 1, 2).unwrap();
        assert_eq!(board.to_string(), "1 0\n0 2");
    }

    proptest! {
        #[test]
        fn prop_index_is_bijective(rows in 1_usize..=4, columns in 1_usize..=4) {
            let board = Board::new(rows, columns);
            let size = board.size();
            let mut seen = vec![false; size * size];
            for r in 0..size {
                for c in 0..size {
                    let idx = board.index(r, c).unwrap();
                    prop_assert!(idx < size * size);
                    prop_assert!(!seen[idx], "index {idx} produced twice");
                    seen[idx] = true;
                }
            }
            prop_assert!(seen.iter().all(|&hit| hit));
        }

        #[test]
        fn prop_regions_partition_the_board(rows in 1_usize..=4, columns in 1_usize..=4) {
            let board = Board::new(rows, columns);
            let size = board.size();
            let mut count = vec![0_u32; size * size];
            for n in 0..size {
                let (start_row, end_row, start_column, end_column) = board.region_bounds(n);
                for idx in board.rect_indices(start_row, end_row, start_column, end_column) {
                    count[idx] += 1;
                }
            }
            prop_assert!(count.iter().all(|&c| c == 1));
        }

        #[test]
        fn prop_set_then_get(rows in 1_usize..=3, columns in 1_usize..=3, r: usize, c: usize, val: usize) {
            let mut board = Board::new(rows, columns);
            let size = board.size();
            let (r, c, val) = (r % size, c % size, val % (size + 1));
            board.set_value(r, c, val).unwrap();
            prop_assert_eq!(board.value(r, c), Ok(val));
        }
    }
}
