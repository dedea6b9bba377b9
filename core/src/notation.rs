use crate::board::BoardState;
use crate::game_state::GameState;
use crate::types::{Color, Square};
use thiserror::Error;

/// Text notation for Othello positions.
///
/// Eight rows separated by '/', top row (rank 1) first. Each row holds eight
/// cells: 'X' for Black, 'O' for White, '-' or '.' for an empty square.
/// A space and the side to move ('X' or 'O') follow the board.
/// Parse error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid position format: {0}")]
    InvalidFormat(String),
    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),
    #[error("invalid side to move: {0}")]
    InvalidSide(String),
    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

impl GameState {
    /// Parses a position in board notation.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();

        if parts.len() != 2 {
            return Err(NotationError::InvalidFormat(format!(
                "Expected 2 fields, got {}",
                parts.len()
            )));
        }

        let board = parse_board(parts[0])?;

        let mut side = parts[1].chars();
        let turn = match (side.next().and_then(Color::from_symbol), side.next()) {
            (Some(color), None) => color,
            _ => return Err(NotationError::InvalidSide(parts[1].to_string())),
        };

        Ok(GameState { board, turn })
    }

    /// Converts the game state to board notation.
    pub fn to_notation(&self) -> String {
        format!("{} {}", board_to_notation(&self.board), self.turn.symbol())
    }
}

/// Parses a square name, reporting the offending text on failure.
pub fn parse_square(name: &str) -> Result<Square, NotationError> {
    Square::from_name(name).ok_or_else(|| NotationError::InvalidSquare(name.to_string()))
}

fn parse_board(board_str: &str) -> Result<BoardState, NotationError> {
    let mut board = BoardState::empty();
    let rows: Vec<&str> = board_str.split('/').collect();

    if rows.len() != 8 {
        return Err(NotationError::InvalidFormat(format!(
            "Expected 8 rows, got {}",
            rows.len()
        )));
    }

    for (row, row_str) in rows.iter().enumerate() {
        let cells: Vec<char> = row_str.chars().collect();
        if cells.len() != 8 {
            return Err(NotationError::InvalidFormat(format!(
                "Row {} has {} cells, expected 8",
                row + 1,
                cells.len()
            )));
        }

        for (col, &ch) in cells.iter().enumerate() {
            let disc = match ch {
                '-' | '.' => None,
                _ => Some(Color::from_symbol(ch).ok_or(NotationError::InvalidCell(ch))?),
            };
            if let Some(square) = Square::new(row as u8, col as u8) {
                board.set_square(square, disc);
            }
        }
    }

    Ok(board)
}

fn board_to_notation(board: &BoardState) -> String {
    let rows: Vec<String> = (0..8)
        .map(|row| {
            (0..8)
                .filter_map(|col| Square::new(row, col))
                .map(|sq| board.piece_at(sq).map_or('-', Color::symbol))
                .collect()
        })
        .collect();
    rows.join("/")
}

/// Well-known positions.
pub mod positions {
    /// Starting position, Black to move.
    pub const STARTING: &str =
        "--------/--------/--------/---OX---/---XO---/--------/--------/-------- X";

    /// Nearly full board on which White has no legal reply.
    pub const WHITE_TO_PASS: &str =
        "XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXO/XXXXXX-- O";

    /// A finished game: every square filled.
    pub const FINISHED: &str =
        "XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO X";
}
