use std::fmt;

/// The two players. Black always moves first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the disc symbol used by the board notation.
    pub const fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Parses a disc symbol ('X' or 'O', either case).
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Color::Black),
            'O' | 'o' => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A cell of the 8x8 board, stored as a row-major index (0-63).
///
/// Rows print as digits ('1'-'8') and columns as letters ('a'-'h'),
/// so row 2, column 3 is `d3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column (both 0-7).
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square name such as `d3`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.trim().chars();
        let col = match chars.next()? {
            c @ 'a'..='h' => c as u8 - b'a',
            c @ 'A'..='H' => c as u8 - b'A',
            _ => return None,
        };
        let row = match chars.next()? {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Square::new(row, col)
    }

    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square index (0-63).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the neighbouring square in direction (dr, dc), if on the board.
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Iterates all squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, (b'1' + self.row()) as char)
    }
}

/// The eight directions a line of discs can be captured along.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A disc placement.
///
/// `to` is the destination cell; `flips` holds the opposing discs the
/// placement turns over, computed by move generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub to: Square,
    pub flips: BitBoard,
}

impl Move {
    pub const fn new(to: Square, flips: BitBoard) -> Self {
        Self { to, flips }
    }

    /// Number of discs this move turns over.
    pub const fn flip_count(self) -> u32 {
        self.flips.count()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to)
    }
}

/// A set of squares packed into a 64-bit integer, one bit per square.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: Self = BitBoard(0);

    /// Creates a bitboard with a single square set.
    pub const fn from_square(square: Square) -> Self {
        BitBoard(1u64 << square.0)
    }

    /// Returns true if the given square is set.
    pub const fn contains(self, square: Square) -> bool {
        (self.0 & (1u64 << square.0)) != 0
    }

    /// Sets the given square.
    pub const fn set(self, square: Square) -> Self {
        BitBoard(self.0 | (1u64 << square.0))
    }

    /// Returns the number of set bits.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        BitBoard(self.0 | other.0)
    }

    /// Returns an iterator over all set squares, lowest index first.
    pub fn iter(self) -> BitBoardIterator {
        BitBoardIterator { bits: self.0 }
    }
}

/// Iterator over set squares in a bitboard.
pub struct BitBoardIterator {
    bits: u64,
}

impl Iterator for BitBoardIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let index = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1; // Clear lowest set bit
            Square::from_index(index)
        }
    }
}
