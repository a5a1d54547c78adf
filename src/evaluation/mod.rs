//! This module implements "static" [evaluation], i.e. predicting the relative
//! value of a given position without looking ahead.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

use crate::chess::board::Board;

mod material;

/// Evaluation in "pawn" units: positive values favor White, negative favor
/// Black.
pub type Value = i32;

/// Evaluates the position. Only the material balance is taken into account.
#[must_use]
pub fn evaluate(board: &Board) -> Value {
    material::material_advantage(board)
}
