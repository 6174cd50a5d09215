//! Typed addressing of rows, columns, and regions, and their evaluation
//! result.

/// One evaluable unit of the board: a row, a column, or a rectangular region.
///
/// Units are identified by an index `n` in `0..size`. Region `n` covers rows
/// `(n / rows) * rows ..= (n / rows) * rows + rows - 1` and columns
/// `(n % rows) * columns ..= (n % rows) * columns + columns - 1`, so the
/// `size` regions tile the board exactly.
///
/// The [`Display`](std::fmt::Display) impl renders a 1-based label
/// (`"row 3"`, `"region 1"`) suitable for result summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Unit {
    /// A row identified by its index in `0..size`.
    #[display("row {}", n + 1)]
    Row {
        /// Row index.
        n: usize,
    },
    /// A column identified by its index in `0..size`.
    #[display("column {}", n + 1)]
    Column {
        /// Column index.
        n: usize,
    },
    /// A rectangular region identified by its index in `0..size`.
    #[display("region {}", n + 1)]
    Region {
        /// Region index.
        n: usize,
    },
}

impl Unit {
    /// Returns an iterator over every unit of a board with the given side
    /// length: all rows, then all columns, then all regions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::Unit;
    ///
    /// let units: Vec<_> = Unit::all(4).collect();
    /// assert_eq!(units.len(), 12);
    /// assert_eq!(units[0], Unit::Row { n: 0 });
    /// assert_eq!(units[11], Unit::Region { n: 3 });
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = Self> {
        let rows = (0..size).map(|n| Self::Row { n });
        let columns = (0..size).map(|n| Self::Column { n });
        let regions = (0..size).map(|n| Self::Region { n });
        rows.chain(columns).chain(regions)
    }
}

/// The evaluation result for one unit.
///
/// Duplicate detection takes precedence over blank detection: a unit holding
/// both a blank and a duplicated value reports [`Conflict`].
///
/// [`Conflict`]: UnitState::Conflict
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum UnitState {
    /// Every cell filled, no value repeated.
    #[display("complete")]
    Complete,
    /// No value repeated, but at least one cell still blank.
    #[display("incomplete")]
    Incomplete,
    /// Some non-blank value appears more than once.
    #[display("conflict")]
    Conflict,
}
