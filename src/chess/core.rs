//! Chess primitives commonly used within [`crate::chess`].

use std::fmt;
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;

/// A square on the board, stored as a pair of coordinates: `x` is the file
/// (column, 0 is file "a") and `y` is the row counted from the top of the
/// board (0 is rank 8, 7 is rank 1). The row order matches how the board is
/// printed and how the piece placement is written down, rank 8 first.
///
/// A [`Square`] can only be constructed within board bounds, so every stored
/// square is a valid one.
///
/// ```
/// use rookery::chess::core::Square;
///
/// let square = Square::try_from("e2").unwrap();
/// assert_eq!((square.x(), square.y()), (4, 6));
/// assert_eq!(square.to_string(), "e2");
/// assert_eq!(Square::try_from("E2").unwrap(), square);
/// assert!(Square::try_from("i9").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Creates a square from its coordinates. Returns [`None`] if either
    /// coordinate is outside of `0..BOARD_WIDTH`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_WIDTH && y < BOARD_WIDTH {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// File index: 0 for "a", 7 for "h".
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row index from the top: 0 for rank 8, 7 for rank 1.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the square shifted by (`dx`, `dy`) or [`None`] if it falls
    /// off the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y)
    }

    /// Iterates over all squares row by row, starting from a8 and ending with
    /// h1.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_WIDTH)
            .cartesian_product(0..BOARD_WIDTH)
            .map(|(y, x)| Self { x, y })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square identifier: file letter (case-insensitive) followed by
    /// the rank digit, e.g. "e2".
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got \"{square}\" with {} chars",
                square.chars().count()
            );
        };
        let x = match file.to_ascii_lowercase() {
            file @ 'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let y = match rank {
            '1'..='8' => BOARD_WIDTH - (rank as u8 - b'0'),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self { x, y })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.x),
            BOARD_WIDTH - self.y
        )
    }
}

/// A standard game of chess is played between two sides: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn push: White pawns move towards rank 8 (decreasing
    /// row index), Black pawns towards rank 1.
    pub(super) const fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row on which the pawns of this color start the game.
    pub(super) const fn pawn_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row of the pieces (everything but pawns) at the start of the game.
    pub(super) const fn back_row(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Self::White),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("color should be 'w' or 'b', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by [`crate::evaluation`]. The king is valued too:
    /// both sides always have exactly one, so it cancels out in a regular
    /// game.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Pawn => 1,
            Self::Knight | Self::Bishop => 3,
            Self::Rook => 5,
            Self::Queen => 9,
            Self::King => 10,
        }
    }

    /// White symbol of the piece. Black pieces use the lowercase version.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Ok(Self::Pawn),
            'N' => Ok(Self::Knight),
            'B' => Ok(Self::Bishop),
            'R' => Ok(Self::Rook),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pawn => "Pawn",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::Rook => "Rook",
            Self::Queen => "Queen",
            Self::King => "King",
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_squares() {
        let square = Square::try_from("a8").unwrap();
        assert_eq!((square.x(), square.y()), (0, 0));
        let square = Square::try_from("h1").unwrap();
        assert_eq!((square.x(), square.y()), (7, 7));
        let square = Square::try_from("E4").unwrap();
        assert_eq!((square.x(), square.y()), (4, 4));
        assert_eq!(square.to_string(), "e4");
    }

    #[test]
    #[should_panic(expected = "square should be two-char, got \"e22\" with 3 chars")]
    fn square_too_long() {
        let _ = Square::try_from("e22").unwrap();
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn square_from_incorrect_file() {
        let _ = Square::try_from("i2").unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '9'")]
    fn square_from_incorrect_rank() {
        let _ = Square::try_from("a9").unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn square_from_incorrect_rank_zero() {
        let _ = Square::try_from("a0").unwrap();
    }

    #[test]
    fn malformed_squares() {
        for input in ["", "e", "ee", "22", "2e", "e2 ", "é2"] {
            assert!(Square::try_from(input).is_err(), "input: {input}");
        }
    }

    #[test]
    fn square_bounds() {
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
        assert!(Square::new(7, 7).is_some());
        assert_eq!(Square::iter().count(), 64);
        assert_eq!(Square::iter().next().unwrap().to_string(), "a8");
        assert_eq!(Square::iter().last().unwrap().to_string(), "h1");
    }

    #[test]
    fn offsets() {
        let square = Square::try_from("e4").unwrap();
        assert_eq!(square.offset(0, -1), Square::new(4, 3));
        assert_eq!(square.offset(-1, 1).unwrap().to_string(), "d3");
        assert_eq!(square.offset(2, 1).unwrap().to_string(), "g3");

        let corner = Square::try_from("a1").unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1).unwrap().to_string(), "b2");

        let corner = Square::try_from("h8").unwrap();
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(-2, 1).unwrap().to_string(), "f7");
    }

    #[test]
    fn colors() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::try_from("w").unwrap(), Color::White);
        assert_eq!(Color::try_from("Black").unwrap(), Color::Black);
        assert!(Color::try_from("red").is_err());
        assert_eq!(Color::White.to_string(), "White");
    }

    #[test]
    fn piece_kinds() {
        assert_eq!(PieceKind::try_from('n').unwrap(), PieceKind::Knight);
        assert_eq!(PieceKind::try_from('K').unwrap(), PieceKind::King);
        assert!(PieceKind::try_from('x').is_err());
        assert_eq!(
            [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King
            ]
            .map(PieceKind::value),
            [1, 3, 3, 5, 9, 10]
        );
        assert_eq!(PieceKind::Queen.to_string(), "Queen");
    }
}
