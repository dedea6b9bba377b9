use crate::board::BoardState;
use crate::game_state::GameState;
use crate::types::{BitBoard, Color, Move, Square, DIRECTIONS};

/// Generates all legal moves for the side to move.
///
/// Squares are visited in row-major order (a1, b1, ..., h8), and callers
/// rely on that order: the first move listed is the search's default.
pub fn generate_legal_moves(state: &GameState) -> Vec<Move> {
    moves_for(&state.board, state.turn)
}

/// Generates all legal moves for `color`, regardless of whose turn it is.
pub fn moves_for(board: &BoardState, color: Color) -> Vec<Move> {
    Square::all()
        .filter_map(|square| {
            let flips = flips_for(board, color, square);
            (!flips.is_empty()).then(|| Move::new(square, flips))
        })
        .collect()
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(board: &BoardState, color: Color) -> bool {
    Square::all().any(|square| !flips_for(board, color, square).is_empty())
}

/// Computes the discs captured by placing `color` on `square`.
/// Returns an empty set when the square is occupied or captures nothing.
pub fn flips_for(board: &BoardState, color: Color, square: Square) -> BitBoard {
    if !board.is_empty(square) {
        return BitBoard::EMPTY;
    }

    DIRECTIONS
        .iter()
        .fold(BitBoard::EMPTY, |acc, &(dr, dc)| {
            acc.union(flips_in_direction(board, color, square, dr, dc))
        })
}

/// Walks from `square` along (dr, dc) collecting opposing discs. The run
/// only counts if it is closed off by a disc of `color`.
fn flips_in_direction(board: &BoardState, color: Color, square: Square, dr: i8, dc: i8) -> BitBoard {
    let opponent = color.opponent();
    let mut run = BitBoard::EMPTY;
    let mut current = square.offset(dr, dc);

    while let Some(sq) = current {
        match board.piece_at(sq) {
            Some(disc) if disc == opponent => {
                run = run.set(sq);
                current = sq.offset(dr, dc);
            }
            Some(_) => return run,
            None => return BitBoard::EMPTY,
        }
    }

    BitBoard::EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|mv| mv.to.to_string()).collect()
    }

    #[test]
    fn test_starting_moves_in_row_major_order() {
        let state = GameState::new();
        let moves = generate_legal_moves(&state);

        assert_eq!(names(&moves), vec!["d3", "c4", "f5", "e6"]);
        assert!(moves.iter().all(|mv| mv.flip_count() == 1));
    }

    #[test]
    fn test_flips_for_occupied_square_is_empty() {
        let board = BoardState::starting_position();
        let d4 = Square::new(3, 3).unwrap();
        assert!(flips_for(&board, Color::Black, d4).is_empty());
    }

    #[test]
    fn test_unclosed_line_captures_nothing() {
        let mut board = BoardState::empty();
        board.set_square(Square::new(0, 1).unwrap(), Some(Color::White));
        board.set_square(Square::new(0, 2).unwrap(), Some(Color::White));

        let a1 = Square::new(0, 0).unwrap();
        assert!(flips_for(&board, Color::Black, a1).is_empty());
        assert!(!has_legal_move(&board, Color::Black));
    }

    #[test]
    fn test_captures_in_several_directions() {
        // Black on e1 and a5, a row of White between each of them and a1
        let mut board = BoardState::empty();
        let black = [(0, 4), (4, 0)];
        let white = [(0, 1), (0, 2), (0, 3), (1, 0), (2, 0), (3, 0)];
        for (r, c) in black {
            board.set_square(Square::new(r, c).unwrap(), Some(Color::Black));
        }
        for (r, c) in white {
            board.set_square(Square::new(r, c).unwrap(), Some(Color::White));
        }
        let flips = flips_for(&board, Color::Black, Square::new(0, 0).unwrap());
        assert_eq!(flips.count(), 6);
    }
}
