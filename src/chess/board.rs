//! The [`Board`]: an 8×8 grid of pieces together with the side to move and the
//! history of the game (executed moves and captured pieces).
//!
//! [`Board::move_piece`] is the only way a game progresses. It validates the
//! request, updates the grid, the history and flips the turn.

use std::fmt;

use anyhow::{bail, Context};
use tracing::{debug, info, trace};

use crate::chess::core::{Color, PieceKind, Square, BOARD_WIDTH};
use crate::chess::error::MoveError;
use crate::chess::piece::Piece;

const WIDTH: usize = BOARD_WIDTH as usize;

/// Order of the pieces on the back rows at the start of the game, from file
/// "a" to file "h".
const BACK_ROW: [PieceKind; WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An entry of the move log: which piece moved where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub color: Color,
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl fmt::Display for MoveRecord {
    /// Writes the record as `<symbol>:<from>-><to>`, e.g. `P:e2->e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        };
        write!(f, "{symbol}:{}->{}", self.from, self.to)
    }
}

/// State of the game: piece placement, side to move and history.
///
/// The board exclusively owns all pieces on the grid. Every piece's stored
/// square matches the cell it occupies as long as the board is only mutated
/// through [`Board::move_piece`], [`Board::place`] and the setup functions.
/// [`Board::set_piece`] writes a cell as-is and leaves that to the caller.
///
/// ```
/// use rookery::chess::board::Board;
/// use rookery::chess::core::Color;
///
/// let mut board = Board::starting();
/// assert!(board.move_piece("e2", "e4").is_ok());
/// assert_eq!(board.turn(), Color::Black);
/// assert_eq!(board.move_log()[0].to_string(), "P:e2->e4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; WIDTH]; WIDTH],
    turn: Color,
    move_log: Vec<MoveRecord>,
    captured: Vec<Piece>,
}

impl Board {
    /// Creates an empty board with White to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[None; WIDTH]; WIDTH],
            turn: Color::White,
            move_log: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// Creates a board with the standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.setup_starting_board();
        board
    }

    /// Clears the grid, places the 32 pieces of the standard opening position
    /// and gives the move to White. The move log and the captured pieces are
    /// kept: a fresh game needs a fresh [`Board`].
    pub fn setup_starting_board(&mut self) {
        self.grid = [[None; WIDTH]; WIDTH];
        for color in [Color::White, Color::Black] {
            for (x, kind) in (0..BOARD_WIDTH).zip(BACK_ROW) {
                if let Some(square) = Square::new(x, color.back_row()) {
                    self.place(Piece::new(kind, color, square));
                }
                if let Some(square) = Square::new(x, color.pawn_row()) {
                    self.place(Piece::new(PieceKind::Pawn, color, square));
                }
            }
        }
        self.turn = Color::White;
    }

    /// Writes `piece` into the cell of `square`, replacing whatever was there.
    /// The piece's stored square is not touched: it is up to the caller to
    /// keep it consistent with `square`.
    pub fn set_piece(&mut self, piece: Piece, square: Square) {
        *self.cell_mut(square) = Some(piece);
    }

    /// Puts the piece on the square it stores, replacing whatever was there.
    pub fn place(&mut self, piece: Piece) {
        self.set_piece(piece, piece.square());
    }

    /// Returns the piece occupying the square, if any.
    #[must_use]
    pub const fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.y() as usize][square.x() as usize].as_ref()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Whether the square is occupied by a piece of the opponent of `color`.
    #[must_use]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color() != color)
    }

    /// The side to move.
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Executed moves, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Captured pieces in the order of capture.
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// All pieces on the board, row by row starting from rank 8.
    pub fn occupied(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    /// Pieces of a given color, in the same order as [`Board::occupied`].
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.occupied().filter(move |piece| piece.color() == color)
    }

    /// Naive material balance, see [`crate::evaluation::evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        crate::evaluation::evaluate(self)
    }

    /// Moves a piece between two squares given by their identifiers (e.g.
    /// "e2" and "e4") and returns the captured piece, if there was one.
    ///
    /// The request is rejected without changing anything if a square
    /// identifier is malformed, the origin is empty, the piece does not belong
    /// to the side to move or the destination holds a piece of the same color.
    ///
    /// NOTE: This does not consult the movement rules or king safety: any
    /// destination that passes the checks above is accepted. Use
    /// [`Board::make_legal_move`] to only allow legal moves.
    pub fn move_piece(&mut self, from: &str, to: &str) -> Result<Option<Piece>, MoveError> {
        let (piece, from, to) = self.validate(from, to)?;
        Ok(self.execute(piece, from, to))
    }

    /// Runs the checks shared by the executors and returns the moving piece
    /// together with the parsed squares.
    pub(super) fn validate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(Piece, Square, Square), MoveError> {
        self.check_request(from, to)
            .inspect_err(|error| debug!(from, to, "Rejected move: {error}"))
    }

    fn check_request(&self, from: &str, to: &str) -> Result<(Piece, Square, Square), MoveError> {
        let parse = |input: &str| {
            Square::try_from(input).map_err(|_| MoveError::InvalidSquareFormat {
                input: input.to_string(),
            })
        };
        let (from, to) = (parse(from)?, parse(to)?);
        let Some(&piece) = self.piece_at(from) else {
            return Err(MoveError::EmptyOrigin { square: from });
        };
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn {
                color: piece.color(),
                turn: self.turn,
            });
        }
        if self
            .piece_at(to)
            .is_some_and(|target| target.color() == piece.color())
        {
            return Err(MoveError::FriendlyCapture { square: to });
        }
        Ok((piece, from, to))
    }

    /// Applies an already validated move: records the capture, relocates the
    /// piece, appends to the move log and passes the turn.
    pub(super) fn execute(&mut self, piece: Piece, from: Square, to: Square) -> Option<Piece> {
        let captured = self.take(to);
        if let Some(target) = captured {
            info!("{} captures {}!", piece.kind(), target.kind());
            self.captured.push(target);
        }
        let _ = self.take(from);
        let mut moved = piece;
        moved.place(to);
        self.place(moved);
        let record = MoveRecord {
            kind: piece.kind(),
            color: piece.color(),
            from,
            to,
        };
        trace!("Executed {record}");
        self.move_log.push(record);
        self.turn = !self.turn;
        captured
    }

    /// Removes and returns the occupant of the square.
    pub(super) fn take(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    /// Overwrites the cell with `occupant`.
    pub(super) fn restore(&mut self, square: Square, occupant: Option<Piece>) {
        *self.cell_mut(square) = occupant;
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.grid[square.y() as usize][square.x() as usize]
    }

    /// Parses the piece placement part of [Forsyth-Edwards Notation]: ranks
    /// from 8 to 1 separated by '/', digits for runs of empty squares and
    /// "KQRBNPkqrbnp" for pieces. It can be followed by the side to move ("w"
    /// or "b"); White moves by default.
    ///
    /// ```
    /// use rookery::chess::board::Board;
    /// use rookery::chess::core::Color;
    ///
    /// let board = Board::from_placement("4k3/8/8/8/8/8/8/4K2R b").unwrap();
    /// assert_eq!(board.turn(), Color::Black);
    /// assert_eq!(board.occupied().count(), 3);
    /// ```
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split_whitespace();
        let Some(placement) = parts.next() else {
            bail!("incorrect placement: missing pieces placement");
        };
        let mut board = Self::new();
        let mut rows = 0;
        for (y, row) in placement.split('/').enumerate() {
            if y >= WIDTH {
                bail!("incorrect placement: expected {BOARD_WIDTH} ranks, got {placement}");
            }
            rows += 1;
            let mut x: u8 = 0;
            for symbol in row.chars() {
                if x >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {row} is longer than {BOARD_WIDTH}");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        x += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let kind = PieceKind::try_from(symbol)?;
                let color = if symbol.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(x, u8::try_from(y)?)
                    .with_context(|| format!("incorrect placement: {symbol} is off the board"))?;
                board.place(Piece::new(kind, color, square));
                x += 1;
            }
            if x != BOARD_WIDTH {
                bail!("incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {row} of length {x}");
            }
        }
        if rows != WIDTH {
            bail!("incorrect placement: there should be {BOARD_WIDTH} ranks, got {placement}");
        }
        if let Some(turn) = parts.next() {
            board.turn = Color::try_from(turn)?;
        }
        if parts.next().is_some() {
            bail!("trailing symbols are not allowed after the side to move");
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Draws the grid with rank labels on the left and file labels below.
    /// Light squares are drawn as `[ ]` and dark squares as `| |`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------------------------")?;
        for (y, row) in self.grid.iter().enumerate() {
            write!(f, "{} ", WIDTH - y)?;
            for (x, cell) in row.iter().enumerate() {
                let symbol = cell.map_or(' ', |piece| piece.symbol());
                if (x + y) % 2 == 0 {
                    write!(f, "[{symbol}]")?;
                } else {
                    write!(f, "|{symbol}|")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h ")
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn square(id: &str) -> Square {
        Square::try_from(id).unwrap()
    }

    #[test]
    fn starting_position() {
        let board = Board::starting();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(board.turn(), Color::White);
        for piece in board.occupied() {
            assert_eq!(board.piece_at(piece.square()), Some(piece));
        }
        let king = board.piece_at(square("e1")).unwrap();
        assert_eq!((king.kind(), king.color()), (PieceKind::King, Color::White));
        let queen = board.piece_at(square("d8")).unwrap();
        assert_eq!((queen.kind(), queen.color()), (PieceKind::Queen, Color::Black));
        assert_eq!(
            board,
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").unwrap()
        );
    }

    #[test]
    fn setup_keeps_history() {
        let mut board = Board::starting();
        assert!(board.move_piece("e2", "e4").is_ok());
        board.setup_starting_board();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.move_log().len(), 1);
        assert!(board.is_empty(square("e4")));
        assert!(!board.is_empty(square("e2")));
    }

    #[test]
    fn set_piece_overwrites() {
        let mut board = Board::starting();
        let queen = Piece::new(PieceKind::Queen, Color::Black, square("e2"));
        board.set_piece(queen, square("e2"));
        assert_eq!(board.piece_at(square("e2")), Some(&queen));
        assert_eq!(board.occupied().count(), 32);
        assert!(board.is_enemy(square("e2"), Color::White));
        assert!(!board.is_enemy(square("e2"), Color::Black));
        assert!(!board.is_enemy(square("e4"), Color::White));
    }

    #[test]
    fn move_and_capture() {
        let mut board = Board::starting();
        assert_eq!(board.move_piece("e2", "e4"), Ok(None));
        assert_eq!(board.move_piece("d7", "d5"), Ok(None));
        let captured = board.move_piece("E4", "d5").unwrap().unwrap();
        assert_eq!((captured.kind(), captured.color()), (PieceKind::Pawn, Color::Black));
        assert_eq!(board.captured(), [captured]);
        let pawn = board.piece_at(square("d5")).unwrap();
        assert_eq!((pawn.color(), pawn.square()), (Color::White, square("d5")));
        assert!(board.is_empty(square("e4")));
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(
            board
                .move_log()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            ["P:e2->e4", "p:d7->d5", "P:e4->d5"]
        );
    }

    #[test]
    fn rejected_moves() {
        let mut board = Board::starting();
        let before = board.clone();
        assert_eq!(
            board.move_piece("e9", "e4"),
            Err(MoveError::InvalidSquareFormat {
                input: "e9".to_string()
            })
        );
        assert_eq!(
            board.move_piece("e2", "e"),
            Err(MoveError::InvalidSquareFormat {
                input: "e".to_string()
            })
        );
        assert_eq!(
            board.move_piece("e4", "e5"),
            Err(MoveError::EmptyOrigin {
                square: square("e4")
            })
        );
        assert_eq!(
            board.move_piece("e7", "e5"),
            Err(MoveError::WrongTurn {
                color: Color::Black,
                turn: Color::White
            })
        );
        assert_eq!(
            board.move_piece("a1", "a2"),
            Err(MoveError::FriendlyCapture {
                square: square("a2")
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn error_messages() {
        let mut board = Board::starting();
        assert_eq!(
            board.move_piece("x1", "a2").unwrap_err().to_string(),
            "Invalid move format: \"x1\" is not a square"
        );
        assert_eq!(
            board.move_piece("d4", "d5").unwrap_err().to_string(),
            "No piece at d4"
        );
        assert_eq!(
            board.move_piece("d7", "d5").unwrap_err().to_string(),
            "Not your turn: Black piece can't move while White is to move"
        );
        assert_eq!(
            board.move_piece("d1", "d2").unwrap_err().to_string(),
            "Cannot capture your own piece on d2"
        );
    }

    #[test]
    fn executor_does_not_check_movement_rules() {
        // The permissive executor accepts any destination which is not
        // occupied by a friendly piece, including captures no piece could make.
        let mut board = Board::starting();
        let captured = board.move_piece("a1", "h8").unwrap().unwrap();
        assert_eq!(captured.kind(), PieceKind::Rook);
        assert_eq!(board.piece_at(square("h8")).unwrap().square(), square("h8"));
        assert_eq!(board.captured().len(), 1);
    }

    #[test]
    fn display() {
        let board = Board::starting();
        assert_eq!(
            board.to_string(),
            [
                "--------------------------",
                "8 [r]|n|[b]|q|[k]|b|[n]|r|",
                "7 |p|[p]|p|[p]|p|[p]|p|[p]",
                "6 [ ]| |[ ]| |[ ]| |[ ]| |",
                "5 | |[ ]| |[ ]| |[ ]| |[ ]",
                "4 [ ]| |[ ]| |[ ]| |[ ]| |",
                "3 | |[ ]| |[ ]| |[ ]| |[ ]",
                "2 [P]|P|[P]|P|[P]|P|[P]|P|",
                "1 |R|[N]|B|[Q]|K|[B]|N|[R]",
                "   a  b  c  d  e  f  g  h ",
            ]
            .join("\n")
        );
    }

    #[test]
    fn placement() {
        let board = Board::from_placement("8/8/8/3k4/8/8/4P3/4K3").unwrap();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.occupied().count(), 3);
        let king = board.piece_at(square("d5")).unwrap();
        assert_eq!((king.kind(), king.color()), (PieceKind::King, Color::Black));
        assert_eq!(king.square(), square("d5"));
    }

    #[test]
    fn incorrect_placement() {
        for input in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "08/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 x",
            "8/8/8/8/8/8/8/8 w -",
        ] {
            assert!(Board::from_placement(input).is_err(), "input: {input}");
        }
    }
}
