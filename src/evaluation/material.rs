//! Provides a very basic implementation of evaluation based on material
//! advantage using "[standard piece valuations]".
//!
//! The king is counted as well (10 points), which does not change anything
//! while both kings are on the board.
//!
//! [standard piece valuations]: https://en.wikipedia.org/wiki/Chess_piece_relative_value

use crate::chess::board::Board;
use crate::chess::core::Color::{self, Black, White};
use crate::evaluation::Value;

fn side_value(board: &Board, color: Color) -> Value {
    board.pieces(color).map(|piece| piece.value()).sum()
}

pub(super) fn material_advantage(board: &Board) -> Value {
    side_value(board, White) - side_value(board, Black)
}
