//! Attack and check detection.
//!
//! Attacks are computed on demand by asking every piece of the attacking side
//! for the squares it threatens. There is no caching: the board is small and
//! the number of pieces is bounded.

use crate::chess::board::Board;
use crate::chess::core::{Color, PieceKind, Square};
use crate::chess::piece::Piece;

impl Board {
    /// Returns the first king of the given color found on the board, scanning
    /// from rank 8 down to rank 1. A board without a king is a valid (if
    /// unusual) state.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Piece> {
        self.pieces(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .copied()
    }

    /// Whether any piece of `by` attacks the square. Pawns attack their
    /// forward diagonals, other pieces attack the squares they can move to.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|piece| piece.attack_squares(self).contains(&square))
    }

    /// Whether the king of `color` is attacked by the opponent. A side without
    /// a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king.square(), !color))
    }
}
