use othello_core::{Move, Square};

/// Positional weight of every cell, indexed `[row][col]`.
///
/// Corners are worth the most; the cells next to them are negative because
/// taking them tends to hand the corner to the opponent.
pub const WEIGHTS: [[i32; 8]; 8] = [
    [50, -5, 10, 8, 8, 10, -5, 50],
    [-5, -10, -6, 2, 2, -6, -10, -5],
    [10, -6, 5, 5, 5, 5, -6, 10],
    [8, 2, 5, -5, -5, 5, 2, 8],
    [8, 2, 5, -5, -5, 5, 2, 8],
    [10, -6, 5, 5, 5, 5, -6, 10],
    [-5, -10, -6, 2, 2, -6, -10, -5],
    [50, -5, 10, 8, 8, 10, -5, 50],
];

/// Returns the weight of a single cell.
pub const fn weight(square: Square) -> i32 {
    WEIGHTS[square.row() as usize][square.col() as usize]
}

/// Scores a move by its destination cell alone. Disc counts, mobility,
/// flips and the side to move play no part.
pub fn score(mv: &Move) -> i32 {
    weight(mv.to)
}
