//! Board operation errors.

/// An error returned by a board operation.
///
/// Every variant is locally recoverable and leaves the board unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A row, column, region, or unit index outside `0..size`.
    #[display("index out of bounds")]
    OutOfBounds,
    /// A proposed cell value greater than the board size.
    #[display("illegal value: {value}")]
    InvalidValue {
        /// The rejected value.
        value: usize,
    },
    /// An attempt to overwrite a cell locked as a puzzle given.
    #[display("cannot set given cell at {row},{column}")]
    GivenLocked {
        /// Row of the locked cell.
        row: usize,
        /// Column of the locked cell.
        column: usize,
    },
}
