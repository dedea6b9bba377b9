use crate::{
    search::{search, SearchResult, SEARCH_DEPTH},
    Agent, AgentInfo, AgentKind, Decision, MatchHost, SearchState, SUPPORTED_GAMES,
};
use othello_core::{GameState, Move};

/// Fixed-depth minimax player with alpha-beta pruning and a positional
/// weight table.
pub struct MinimaxAgent {
    name: String,
    depth: u8,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Runs the search and reports the root's chosen move.
    pub fn analyse<S: SearchState>(&self, state: &S) -> SearchResult {
        search(state, self.depth)
    }

    /// Returns the chosen move, or None if the state has no legal moves.
    pub fn select_move<S: SearchState>(&self, state: &S) -> Option<Move> {
        self.analyse(state).best_move
    }

    /// Appends at most one move to `moves`. If `state` is a finished game,
    /// the host is terminated once.
    pub fn make_move_with<S, H>(&self, state: &S, host: &mut H, moves: &mut Vec<Move>)
    where
        S: SearchState,
        H: MatchHost + ?Sized,
    {
        decision_from(&self.analyse(state)).deliver(host, moves);
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

fn decision_from(result: &SearchResult) -> Decision {
    Decision {
        best_move: result.best_move,
        game_ended: result.game_ended(),
    }
}

impl Agent for MinimaxAgent {
    fn decide(&mut self, state: &GameState) -> Decision {
        decision_from(&self.analyse(state))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn info(&self) -> AgentInfo {
        AgentInfo {
            name: "Minimax".to_string(),
            description: format!(
                "Alpha-beta minimax searching {} plies with a positional weight table",
                self.depth
            ),
            supported_games: SUPPORTED_GAMES.to_vec(),
            kind: AgentKind::Player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{positions, Match, MatchStatus};

    #[derive(Default)]
    struct CountingHost {
        terminations: usize,
    }

    impl MatchHost for CountingHost {
        fn terminate(&mut self) {
            self.terminations += 1;
        }
    }

    /// Black to move with h8 as the only reply; the game ends right after.
    const LAST_MOVE: &str =
        "XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXO/XXXXXX-- X";

    #[test]
    fn test_default_depth() {
        let agent = MinimaxAgent::new();
        assert_eq!(agent.depth(), 4);
        assert_eq!(agent.name(), "Minimax(depth=4)");
    }

    #[test]
    fn test_returns_legal_move_from_start() {
        let state = GameState::new();
        let agent = MinimaxAgent::new();

        let mv = agent.select_move(&state).unwrap();
        assert!(state.legal_moves().contains(&mv));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let state = GameState::new().try_move(othello_core::parse_square("d3").unwrap()).unwrap();
        let mut agent = MinimaxAgent::new();

        let first = agent.best_move(&state);
        let second = agent.best_move(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_finished_game_terminates_once() {
        let state = GameState::from_notation(positions::FINISHED).unwrap();
        let agent = MinimaxAgent::new();
        let mut host = CountingHost::default();
        let mut moves = Vec::new();

        agent.make_move_with(&state, &mut host, &mut moves);

        assert_eq!(host.terminations, 1);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_pass_position_does_not_terminate() {
        let state = GameState::from_notation(positions::WHITE_TO_PASS).unwrap();
        let agent = MinimaxAgent::new();
        let mut host = CountingHost::default();
        let mut moves = Vec::new();

        agent.make_move_with(&state, &mut host, &mut moves);

        assert_eq!(host.terminations, 0);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_game_end_inside_lookahead_keeps_match_alive() {
        let state = GameState::from_notation(LAST_MOVE).unwrap();
        let agent = MinimaxAgent::new();
        let mut host = CountingHost::default();
        let mut moves = Vec::new();

        agent.make_move_with(&state, &mut host, &mut moves);

        assert_eq!(host.terminations, 0);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to.to_string(), "h8");
        assert!(agent.analyse(&state).stats.game_endings > 0);
    }

    #[test]
    fn test_agent_trait_tears_down_match() {
        let state = GameState::from_notation(positions::FINISHED).unwrap();
        let mut game = Match::new(state.clone());
        game.register_player("minimax", othello_core::Color::Black);
        let mut agent = MinimaxAgent::new();
        let mut moves = Vec::new();

        agent.make_move(&state, &mut game, &mut moves);

        assert_eq!(game.status(), MatchStatus::Stopped);
        assert!(game.players().is_empty());
        assert!(!game.engine_active());
        assert!(moves.is_empty());
    }

    #[test]
    fn test_info_declares_othello_player() {
        let info = MinimaxAgent::new().info();
        assert_eq!(info.supported_games, vec!["othello"]);
        assert_eq!(info.kind, AgentKind::Player);
    }
}
