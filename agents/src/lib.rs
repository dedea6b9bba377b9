pub mod arena;
pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use othello_core::{GameState, Match, Move};

/// Core trait for Othello agents
pub trait Agent {
    /// Decide on a move for the side to move in `state`.
    fn decide(&mut self, state: &GameState) -> Decision;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Discovery metadata. Carries no runtime behaviour.
    fn info(&self) -> AgentInfo;

    /// Get the best move for the current position
    fn best_move(&mut self, state: &GameState) -> Option<Move> {
        self.decide(state).best_move
    }

    /// Appends the chosen move to `moves`, if there is one. When the
    /// decision saw the game end, the host is torn down first.
    fn make_move(&mut self, state: &GameState, host: &mut dyn MatchHost, moves: &mut Vec<Move>) {
        let decision = self.decide(state);
        decision.deliver(host, moves);
    }
}

/// What an agent concluded about a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Option<Move>,
    /// Set when any explored position had no legal moves and the game was over.
    pub game_ended: bool,
}

impl Decision {
    /// Hands the decision to a host: one `terminate` call if the game ended,
    /// then at most one move appended.
    pub fn deliver<H: MatchHost + ?Sized>(self, host: &mut H, moves: &mut Vec<Move>) {
        if self.game_ended {
            host.terminate();
        }
        if let Some(mv) = self.best_move {
            moves.push(mv);
        }
    }
}

/// Game state contract consumed by the search.
pub trait SearchState: Clone {
    /// Legal moves, in the order the search should consider them.
    fn valid_moves(&self) -> Vec<Move>;

    /// True once the game has ended.
    fn is_terminal(&self) -> bool;

    /// Independent copy of this state with `mv` played.
    fn play(&self, mv: &Move) -> Self;
}

/// Lifecycle hooks of whatever hosts the game.
pub trait MatchHost {
    /// Stop play, release engine resources, and deregister all players.
    fn terminate(&mut self);
}

/// Kind of plugin an agent registers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Player,
}

/// Registration metadata for an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub name: String,
    pub description: String,
    pub supported_games: Vec<&'static str>,
    pub kind: AgentKind,
}

/// Games every agent in this crate has been validated against.
pub const SUPPORTED_GAMES: &[&str] = &["othello"];

impl SearchState for GameState {
    fn valid_moves(&self) -> Vec<Move> {
        self.legal_moves()
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn play(&self, mv: &Move) -> Self {
        self.apply_move(*mv)
    }
}

impl MatchHost for Match {
    fn terminate(&mut self) {
        Match::terminate(self);
    }
}

pub use arena::{play_match, MatchReport, TurnEvent};
pub use evaluation::*;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::*;
