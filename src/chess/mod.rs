//! Implementation of chess rules: board representation, move generation, check
//! detection and move execution.
//!
//! Castling, en passant, promotions and game termination rules are not
//! implemented.

pub mod attacks;
pub mod board;
pub mod core;
pub mod error;
pub mod legality;
pub mod piece;
