//! Reasons for rejecting a move request.

use thiserror::Error;

use crate::chess::core::{Color, Square};

/// Errors reported by [`crate::chess::board::Board::move_piece`] and
/// [`crate::chess::board::Board::make_legal_move`]. A rejected move never
/// changes the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Square identifier is not a file letter followed by a rank digit.
    #[error("Invalid move format: \"{input}\" is not a square")]
    InvalidSquareFormat {
        #[allow(missing_docs)]
        input: String,
    },

    /// There is no piece on the origin square.
    #[error("No piece at {square}")]
    EmptyOrigin {
        #[allow(missing_docs)]
        square: Square,
    },

    /// The piece on the origin square belongs to the side that is not to move.
    #[error("Not your turn: {color} piece can't move while {turn} is to move")]
    WrongTurn {
        #[allow(missing_docs)]
        color: Color,
        #[allow(missing_docs)]
        turn: Color,
    },

    /// Destination is occupied by a piece of the same color.
    #[error("Cannot capture your own piece on {square}")]
    FriendlyCapture {
        #[allow(missing_docs)]
        square: Square,
    },

    /// The move breaks the movement rules or leaves the king in check. Only
    /// reported by the strict executor.
    #[error("Illegal move: {from}->{to}")]
    IllegalMove {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
}
