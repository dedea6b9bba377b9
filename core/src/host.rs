//! Match lifecycle: the live game, its seated players, and teardown.

use crate::error::GameError;
use crate::game_state::GameState;
use crate::types::{Color, Move};
use tracing::{debug, info};

/// Whether a match still accepts moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchStatus {
    Running,
    Stopped,
}

/// A player registered with the match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Seat {
    pub name: String,
    pub color: Color,
}

/// Hosts a single game between registered players.
#[derive(Debug)]
pub struct Match {
    state: GameState,
    players: Vec<Seat>,
    status: MatchStatus,
    engine_active: bool,
    history: Vec<Move>,
}

impl Match {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            players: Vec::new(),
            status: MatchStatus::Running,
            engine_active: true,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == MatchStatus::Running
    }

    /// True until the engine's resources have been released.
    pub fn engine_active(&self) -> bool {
        self.engine_active
    }

    pub fn players(&self) -> &[Seat] {
        &self.players
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Seats a player for `color`, replacing whoever held that color.
    pub fn register_player(&mut self, name: impl Into<String>, color: Color) {
        let name = name.into();
        debug!(%color, %name, "registering player");
        self.players.retain(|seat| seat.color != color);
        self.players.push(Seat { name, color });
    }

    /// Returns the player seated for `color`, if any.
    pub fn player(&self, color: Color) -> Option<&Seat> {
        self.players.iter().find(|seat| seat.color == color)
    }

    /// Plays a move for the side to move. The move's destination is checked
    /// against the live position, so stale moves are rejected.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        self.ensure_running()?;
        let next = self.state.try_move(mv.to)?;
        self.history.push(mv);
        self.state = next;
        Ok(())
    }

    /// Passes for the side to move.
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;
        self.state = self.state.pass()?;
        Ok(())
    }

    /// Stops play. Further moves are refused.
    pub fn stop(&mut self) {
        if self.status == MatchStatus::Running {
            info!(moves = self.history.len(), "match stopped");
            self.status = MatchStatus::Stopped;
        }
    }

    /// Releases engine resources.
    pub fn shutdown(&mut self) {
        if self.engine_active {
            debug!("engine shut down");
            self.engine_active = false;
        }
    }

    /// Deregisters every player.
    pub fn remove_all_players(&mut self) {
        if !self.players.is_empty() {
            debug!(count = self.players.len(), "removing all players");
            self.players.clear();
        }
    }

    /// Full teardown: stop, shut down, and deregister everyone.
    /// Calling it again is a no-op.
    pub fn terminate(&mut self) {
        self.stop();
        self.shutdown();
        self.remove_all_players();
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.status {
            MatchStatus::Running => Ok(()),
            MatchStatus::Stopped => Err(GameError::MatchStopped),
        }
    }
}
