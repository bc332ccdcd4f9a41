//! Board and piece model for the rustris move planner.
//!
//! This crate holds the pure simulation primitives the AI builds on: the
//! playfield grid, the seven tetromino kinds with their rotation shapes and
//! wall-kick tables, collision testing, drop projection, piece locking, and
//! line-clear simulation. Everything is value semantics: simulating a
//! placement means cloning a [`Grid`], never mutating shared state.

pub use self::{grid::*, piece::*};

pub mod grid;
pub mod piece;
