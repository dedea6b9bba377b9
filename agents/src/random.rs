use crate::{Agent, AgentInfo, AgentKind, Decision, SUPPORTED_GAMES};
use othello_core::GameState;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks uniformly among the legal moves.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible agent: the same seed plays the same game.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            name: format!("Random(seed={})", seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, state: &GameState) -> Decision {
        let moves = state.legal_moves();

        Decision {
            best_move: moves.choose(&mut self.rng).copied(),
            game_ended: moves.is_empty() && state.is_game_over(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn info(&self) -> AgentInfo {
        AgentInfo {
            name: "Random".to_string(),
            description: "Uniformly random legal moves".to_string(),
            supported_games: SUPPORTED_GAMES.to_vec(),
            kind: AgentKind::Player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::positions;

    #[test]
    fn test_random_move_is_legal() {
        let state = GameState::new();
        let mut agent = RandomAgent::with_seed(7);

        for _ in 0..20 {
            let mv = agent.best_move(&state).unwrap();
            assert!(state.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let state = GameState::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.best_move(&state), b.best_move(&state));
        }
    }

    #[test]
    fn test_finished_game_reports_end() {
        let state = GameState::from_notation(positions::FINISHED).unwrap();
        let decision = RandomAgent::with_seed(1).decide(&state);

        assert!(decision.best_move.is_none());
        assert!(decision.game_ended);
    }

    #[test]
    fn test_pass_position_is_not_an_end() {
        let state = GameState::from_notation(positions::WHITE_TO_PASS).unwrap();
        let decision = RandomAgent::with_seed(1).decide(&state);

        assert!(decision.best_move.is_none());
        assert!(!decision.game_ended);
    }
}
