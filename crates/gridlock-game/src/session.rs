//! A puzzle session: a board plus the givens-entry/play lifecycle.

use gridlock_core::{Board, BoardError, Unit, UnitState};

/// The lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// The puzzle is being typed in; nothing is locked yet.
    EnterGivens,
    /// Givens are locked; the player fills the remaining cells.
    Play,
}

/// An error returned by a session operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum SessionError {
    /// A board operation failed.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// `begin_play` was refused because some unit is in conflict.
    #[display("cannot begin play while the board has conflicts")]
    ConflictingGivens,
    /// `begin_play` was called a second time.
    #[display("play has already begun")]
    AlreadyPlaying,
}

/// One line of an answer summary: a unit and its evaluated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitReport {
    /// The unit that was evaluated.
    pub unit: Unit,
    /// Its state.
    pub state: UnitState,
}

/// A puzzle session over one board.
///
/// The session starts in [`Phase::EnterGivens`]. Values set during that phase
/// become the puzzle's givens when [`begin_play`](Self::begin_play) locks
/// them; the transition is refused while any row, column, or region is in
/// conflict, and happens at most once per session.
///
/// # Examples
///
/// ```
/// use gridlock_core::UnitState;
/// use gridlock_game::Session;
///
/// let mut session = Session::new(2, 2);
/// session.set_value(0, 0, 1).unwrap();
/// session.set_value(1, 1, 4).unwrap();
/// session.begin_play().unwrap();
///
/// // Givens are locked, other cells stay playable.
/// assert!(session.set_value(0, 0, 2).is_err());
/// session.set_value(0, 1, 2).unwrap();
///
/// assert_eq!(
///     session.board().region_state(0),
///     Ok(UnitState::Incomplete)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    phase: Phase,
}

impl Session {
    /// Creates a session over a blank board with `rows × columns` regions.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            board: Board::new(rows, columns),
            phase: Phase::EnterGivens,
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Stores `val` at `(row, column)`; `0` clears the cell.
    ///
    /// Legal in both phases: during givens entry it edits the puzzle,
    /// during play it fills (non-given) cells.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] failures; the board is left unchanged.
    pub fn set_value(&mut self, row: usize, column: usize, val: usize) -> Result<(), SessionError> {
        self.board.set_value(row, column, val)?;
        Ok(())
    }

    /// Clears the cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] failures; the board is left unchanged.
    pub fn clear(&mut self, row: usize, column: usize) -> Result<(), SessionError> {
        self.set_value(row, column, 0)
    }

    /// Returns `true` if any row, column, or region is in conflict.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.board
            .unit_states()
            .any(|(_, state)| state.is_conflict())
    }

    /// Locks the entered values as givens and enters [`Phase::Play`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyPlaying`] if play has already begun and
    /// [`SessionError::ConflictingGivens`] if any unit is in conflict. In
    /// both cases the board is left unchanged.
    pub fn begin_play(&mut self) -> Result<(), SessionError> {
        if self.phase.is_play() {
            return Err(SessionError::AlreadyPlaying);
        }
        if self.has_conflicts() {
            log::debug!("begin_play refused: board has conflicts");
            return Err(SessionError::ConflictingGivens);
        }
        self.board.fix_givens();
        self.phase = Phase::Play;
        log::info!(
            "givens locked, play begins on {}x{} board",
            self.board.size(),
            self.board.size()
        );
        Ok(())
    }

    /// Evaluates every unit and returns the summary, rows first, then
    /// columns, then regions.
    #[must_use]
    pub fn check_answers(&self) -> Vec<UnitReport> {
        self.board
            .unit_states()
            .map(|(unit, state)| UnitReport { unit, state })
            .collect()
    }

    /// Returns `true` once every row, column, and region is complete.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board
            .unit_states()
            .all(|(_, state)| state.is_complete())
    }
}
