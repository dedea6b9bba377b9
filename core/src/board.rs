/// Board representation: one optional disc per square.
use crate::types::*;

/// The 64 cells of an Othello board, indexed by `Square::index()`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardState {
    squares: [Option<Color>; 64],
}

impl BoardState {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position: White on d4 and e5,
    /// Black on e4 and d5.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (row, col, color) in [
            (3, 3, Color::White),
            (3, 4, Color::Black),
            (4, 3, Color::Black),
            (4, 4, Color::White),
        ] {
            if let Some(square) = Square::new(row, col) {
                board.set_square(square, Some(color));
            }
        }
        board
    }

    /// Returns the disc on a square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Color> {
        self.squares[square.index() as usize]
    }

    /// Places or clears a disc.
    pub fn set_square(&mut self, square: Square, disc: Option<Color>) {
        self.squares[square.index() as usize] = disc;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Counts the discs of one color.
    pub fn count(&self, color: Color) -> u32 {
        self.squares.iter().filter(|&&disc| disc == Some(color)).count() as u32
    }

    /// Returns every square holding a disc of `color`.
    pub fn occupancy(&self, color: Color) -> BitBoard {
        Square::all()
            .filter(|&sq| self.piece_at(sq) == Some(color))
            .fold(BitBoard::EMPTY, BitBoard::set)
    }

    /// Returns true when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    /// Turns every disc in `squares` over to `color`.
    pub fn flip(&mut self, squares: BitBoard, color: Color) {
        for square in squares.iter() {
            self.set_square(square, Some(color));
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = BoardState::starting_position();

        assert_eq!(board.piece_at(Square::new(3, 3).unwrap()), Some(Color::White));
        assert_eq!(board.piece_at(Square::new(3, 4).unwrap()), Some(Color::Black));
        assert_eq!(board.piece_at(Square::new(4, 3).unwrap()), Some(Color::Black));
        assert_eq!(board.piece_at(Square::new(4, 4).unwrap()), Some(Color::White));
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_flip_converts_discs() {
        let mut board = BoardState::starting_position();
        let d4 = Square::new(3, 3).unwrap();
        board.flip(BitBoard::from_square(d4), Color::Black);

        assert_eq!(board.piece_at(d4), Some(Color::Black));
        assert_eq!(board.count(Color::Black), 3);
        assert_eq!(board.occupancy(Color::White).count(), 1);
    }

    #[test]
    fn test_full_board() {
        let mut board = BoardState::empty();
        for square in Square::all() {
            board.set_square(square, Some(Color::White));
        }
        assert!(board.is_full());
        assert_eq!(board.count(Color::White), 64);
    }
}
