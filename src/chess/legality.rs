//! Legal move generation: pseudo-legal moves that do not leave the mover's
//! king in check.
//!
//! Each candidate is tried on the board itself. [`Simulation`] moves the piece,
//! lets the caller inspect the resulting position and puts everything back
//! when it goes out of scope, so the board is restored even if the inspection
//! unwinds.

use std::ops::Deref;

use crate::chess::board::Board;
use crate::chess::core::{Color, Square};
use crate::chess::error::MoveError;
use crate::chess::piece::Piece;

/// A move applied to the board for inspection only. Dropping it restores the
/// origin and destination cells, including the moved piece's stored square.
struct Simulation<'a> {
    board: &'a mut Board,
    origin: Square,
    origin_occupant: Option<Piece>,
    destination: Square,
    destination_occupant: Option<Piece>,
}

impl<'a> Simulation<'a> {
    fn new(board: &'a mut Board, piece: &Piece, destination: Square) -> Self {
        let origin = piece.square();
        let origin_occupant = board.take(origin);
        let destination_occupant = board.take(destination);
        let mut moved = *piece;
        moved.place(destination);
        board.place(moved);
        Self {
            board,
            origin,
            origin_occupant,
            destination,
            destination_occupant,
        }
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board
            .restore(self.destination, self.destination_occupant);
        self.board.restore(self.origin, self.origin_occupant);
    }
}

impl Board {
    /// Whether moving `piece` to `destination` keeps its own king out of
    /// check. The move itself is not checked against the movement rules.
    pub fn is_legal_move(&mut self, piece: &Piece, destination: Square) -> bool {
        let simulation = Simulation::new(self, piece, destination);
        let in_check = simulation.is_in_check(piece.color());
        !in_check
    }

    /// Pseudo-legal moves of the piece which do not leave its king in check.
    ///
    /// The board is temporarily modified while the candidates are tried, but
    /// is identical to the original once this returns.
    ///
    /// ```
    /// use rookery::chess::board::Board;
    /// use rookery::chess::core::Square;
    ///
    /// // The bishop is pinned to its king by the rook.
    /// let mut board = Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
    /// let bishop = *board.piece_at(Square::try_from("e2").unwrap()).unwrap();
    /// assert!(board.legal_moves(&bishop).is_empty());
    /// assert_eq!(bishop.pseudo_legal_moves(&board).len(), 9);
    /// ```
    pub fn legal_moves(&mut self, piece: &Piece) -> Vec<Square> {
        let candidates = piece.pseudo_legal_moves(self);
        candidates
            .into_iter()
            .filter(|&destination| self.is_legal_move(piece, destination))
            .collect()
    }

    /// All legal moves of the given side, grouped by piece in board order. An
    /// empty result means the side is either checkmated or stalemated.
    pub fn get_all_legal_moves(&mut self, color: Color) -> Vec<(Piece, Square)> {
        let pieces: Vec<Piece> = self.pieces(color).copied().collect();
        pieces
            .into_iter()
            .flat_map(|piece| {
                self.legal_moves(&piece)
                    .into_iter()
                    .map(move |destination| (piece, destination))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Same as [`Board::move_piece`], but also rejects moves that break the
    /// movement rules of the piece or leave its king in check.
    pub fn make_legal_move(&mut self, from: &str, to: &str) -> Result<Option<Piece>, MoveError> {
        let (piece, from, to) = self.validate(from, to)?;
        if !self.legal_moves(&piece).contains(&to) {
            tracing::debug!(%from, %to, "Rejected illegal move");
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(self.execute(piece, from, to))
    }
}
