//! Play-session layer for the gridlock board model.
//!
//! A [`Session`] wraps a [`Board`](gridlock_core::Board) with the lifecycle a
//! puzzle goes through: givens are typed in, checked for conflicts, locked,
//! and then played until every row, column, and region is complete. The crate
//! also carries the [key-code mapping](input::value_from_key_code) front ends
//! use to turn number-key presses into cell values.
//!
//! # Examples
//!
//! ```
//! use gridlock_game::Session;
//!
//! let mut session = Session::new(2, 2);
//! session.set_value(0, 0, 1).unwrap();
//! session.set_value(0, 1, 2).unwrap();
//!
//! // Lock the entered values and start playing.
//! session.begin_play().unwrap();
//! assert!(session.phase().is_play());
//! assert!(session.set_value(0, 0, 3).is_err());
//! ```

pub mod input;
pub mod session;

// Re-export commonly used types
pub use self::{
    input::value_from_key_code,
    session::{Phase, Session, SessionError, UnitReport},
};
