use crate::board::*;
use crate::error::GameError;
use crate::move_gen::{flips_for, generate_legal_moves, has_legal_move};
use crate::types::*;

/// Complete state of an Othello game.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    /// The current board position
    pub board: BoardState,
    /// Which side is to move
    pub turn: Color,
}

impl GameState {
    /// Creates a new game in the starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: BoardState::starting_position(),
            turn: Color::Black,
        }
    }

    /// Creates an empty game state for testing.
    pub fn empty() -> Self {
        Self {
            board: BoardState::empty(),
            turn: Color::Black,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Applies a generated move and returns the resulting state.
    ///
    /// The turn passes to the opponent unless the opponent has no legal
    /// move while the mover still does, in which case the mover plays again.
    pub fn apply_move(&self, mv: Move) -> Self {
        let mover = self.turn;
        let mut board = self.board.clone();
        board.set_square(mv.to, Some(mover));
        board.flip(mv.flips, mover);

        let opponent = mover.opponent();
        let turn = if !has_legal_move(&board, opponent) && has_legal_move(&board, mover) {
            mover
        } else {
            opponent
        };

        Self { board, turn }
    }

    /// Plays a disc on `square` after checking that it is legal.
    pub fn try_move(&self, square: Square) -> Result<Self, GameError> {
        let flips = flips_for(&self.board, self.turn, square);
        if flips.is_empty() {
            return Err(GameError::IllegalMove(square));
        }
        Ok(self.apply_move(Move::new(square, flips)))
    }

    /// Hands the turn to the opponent. Only allowed when the side to move
    /// has nothing to play.
    pub fn pass(&self) -> Result<Self, GameError> {
        if has_legal_move(&self.board, self.turn) {
            return Err(GameError::PassNotAllowed);
        }
        Ok(Self {
            board: self.board.clone(),
            turn: self.turn.opponent(),
        })
    }

    /// Returns true if the side to move has no legal move.
    pub fn must_pass(&self) -> bool {
        !has_legal_move(&self.board, self.turn)
    }

    /// The game is over when neither side can place a disc.
    pub fn is_game_over(&self) -> bool {
        !has_legal_move(&self.board, self.turn) && !has_legal_move(&self.board, self.turn.opponent())
    }

    pub fn disc_count(&self, color: Color) -> u32 {
        self.board.count(color)
    }

    /// Returns the winner of a finished game, or None for a draw or a game
    /// still in progress.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }

        let black = self.disc_count(Color::Black);
        let white = self.disc_count(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
