//! Core board model for variable-size Sudoku puzzles.
//!
//! This crate provides the storage and evaluation engine for a Sudoku board
//! whose regions are `rows × columns` rectangles, making the board
//! `(rows·columns) × (rows·columns)` cells per side. It knows nothing about
//! rendering or input handling; those live in front-end crates that consume
//! the read accessors and state reports defined here.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Cell storage** - [`grid`]: a flat, index-addressed store of cell
//!    records (value plus given-flag) with no coordinate knowledge.
//! 2. **The board** - [`board`]: coordinate translation, region partitioning,
//!    mutation guarding (given cells are locked), and per-unit state
//!    evaluation.
//! 3. **Units and states** - [`unit`]: typed addressing of rows, columns, and
//!    regions, and the three-valued result of evaluating one
//!    ([`Complete`], [`Incomplete`], [`Conflict`]).
//!
//! [`Complete`]: UnitState::Complete
//! [`Incomplete`]: UnitState::Incomplete
//! [`Conflict`]: UnitState::Conflict
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, UnitState};
//!
//! // A 4x4 board with 2x2 regions.
//! let mut board = Board::new(2, 2);
//! board.set_value(0, 0, 1).unwrap();
//! board.set_value(0, 1, 2).unwrap();
//! board.set_value(1, 0, 3).unwrap();
//! board.set_value(1, 1, 4).unwrap();
//!
//! // The top-left region is now fully and legally filled.
//! assert_eq!(board.region_state(0), Ok(UnitState::Complete));
//!
//! // Lock the entered values as puzzle givens; they can no longer change.
//! board.fix_givens();
//! assert!(board.set_value(0, 0, 3).is_err());
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod unit;

// Re-export commonly used types
pub use self::{
    board::Board,
    error::BoardError,
    unit::{Unit, UnitState},
};
