//! Pieces and their movement rules.
//!
//! Every piece knows how to produce its [pseudo-legal] moves: the squares it
//! could move to according to its movement pattern and the occupancy of the
//! board, ignoring whether the move would leave its own king in check. The
//! check-aware filtering is done by the [`Board`] in
//! [`crate::chess::legality`].
//!
//! [pseudo-legal]: https://www.chessprogramming.org/Pseudo-Legal_Move

use std::fmt;

use crate::chess::board::Board;
use crate::chess::core::{Color, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
    (2, -1),
    (1, -2),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

const CARDINALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// A piece of a given kind and color standing on a specific square.
///
/// Pieces are owned by the [`Board`] grid. The stored square is updated by
/// the move executor whenever the piece moves; pieces do not remember where
/// they have been.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The square the piece believes it stands on.
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Material value of the piece, see [`PieceKind::value`].
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// Uppercase symbol for White pieces, lowercase for Black.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    pub(super) fn place(&mut self, square: Square) {
        self.square = square;
    }

    /// Squares the piece can move to, respecting occupancy and capture rules
    /// but not the safety of its own king. Destinations outside of the board
    /// are never produced.
    ///
    /// ```
    /// use rookery::chess::board::Board;
    /// use rookery::chess::core::Square;
    ///
    /// let board = Board::starting();
    /// let knight = board.piece_at(Square::try_from("g1").unwrap()).unwrap();
    /// let mut moves: Vec<_> = knight
    ///     .pseudo_legal_moves(&board)
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// moves.sort();
    /// assert_eq!(moves, ["f3", "h3"]);
    /// ```
    #[must_use]
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Square> {
        let mut moves = Vec::new();
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(board, &mut moves),
            PieceKind::Knight => self.step(board, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => self.slide(board, &DIAGONALS, &mut moves),
            PieceKind::Rook => self.slide(board, &CARDINALS, &mut moves),
            PieceKind::Queen => self.slide(board, &ALL_DIRECTIONS, &mut moves),
            PieceKind::King => self.step(board, &ALL_DIRECTIONS, &mut moves),
        }
        moves
    }

    /// Squares the piece threatens. For pawns these are the two forward
    /// diagonals regardless of what stands there; every other piece attacks
    /// exactly the squares it can move to.
    #[must_use]
    pub fn attack_squares(&self, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => [-1, 1]
                .into_iter()
                .filter_map(|dx| self.square.offset(dx, self.color.forward()))
                .collect(),
            _ => self.pseudo_legal_moves(board),
        }
    }

    fn pawn_moves(&self, board: &Board, moves: &mut Vec<Square>) {
        let forward = self.color.forward();
        if let Some(single) = self.square.offset(0, forward) {
            if board.is_empty(single) {
                moves.push(single);
                if self.square.y() == self.color.pawn_row() {
                    if let Some(double) = single.offset(0, forward) {
                        if board.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }
        // No en passant: only occupied squares can be captured.
        for dx in [-1, 1] {
            if let Some(target) = self.square.offset(dx, forward) {
                if board.is_enemy(target, self.color) {
                    moves.push(target);
                }
            }
        }
    }

    fn step(&self, board: &Board, offsets: &[(i8, i8)], moves: &mut Vec<Square>) {
        moves.extend(
            offsets
                .iter()
                .filter_map(|&(dx, dy)| self.square.offset(dx, dy))
                .filter(|&target| board.is_empty(target) || board.is_enemy(target, self.color)),
        );
    }

    /// Casts rays until the edge of the board or the first piece. An enemy
    /// piece terminates the ray but can be captured.
    fn slide(&self, board: &Board, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
        for &(dx, dy) in directions {
            let mut current = self.square;
            while let Some(next) = current.offset(dx, dy) {
                match board.piece_at(next) {
                    None => moves.push(next),
                    Some(blocker) => {
                        if blocker.color != self.color {
                            moves.push(next);
                        }
                        break;
                    },
                }
                current = next;
            }
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.square)
    }
}
