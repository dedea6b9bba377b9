use crate::game_state::GameState;
use crate::types::Move;

/// Perft (performance test) results at a depth.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub passes: u64,
    pub flips: u64,
    pub game_overs: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.passes += other.passes;
        self.flips += other.flips;
        self.game_overs += other.game_overs;
    }
}

/// Counts the leaf nodes of the legal move tree to `depth`.
///
/// A forced pass counts as one move. A finished game contributes no nodes
/// below it.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();

    if moves.is_empty() {
        return match state.pass() {
            Ok(passed) if !state.is_game_over() => perft(&passed, depth - 1),
            _ => 0,
        };
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&state.apply_move(*mv), depth - 1))
        .sum()
}

/// Performs perft with a per-move breakdown at the root.
pub fn perft_divide(state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    state
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&state.apply_move(mv), depth - 1)
            };
            (mv, nodes)
        })
        .collect()
}

/// Performs perft collecting pass, flip and game-over statistics.
pub fn perft_detailed(state: &GameState, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 {
        results.nodes = 1;
        if state.is_game_over() {
            results.game_overs = 1;
        }
        return results;
    }

    let moves = state.legal_moves();

    if moves.is_empty() {
        if let (false, Ok(passed)) = (state.is_game_over(), state.pass()) {
            let mut child = perft_detailed(&passed, depth - 1);
            child.passes += 1;
            results.add(&child);
        }
        return results;
    }

    for mv in moves {
        if depth == 1 {
            results.flips += u64::from(mv.flip_count());
        }
        let child = perft_detailed(&state.apply_move(mv), depth - 1);
        results.add(&child);
    }

    results
}

/// Known perft values.
pub mod positions {
    /// Starting position perft values.
    pub const STARTING_POSITION: &[(u8, u64)] = &[
        (1, 4),
        (2, 12),
        (3, 56),
        (4, 244),
        (5, 1_396),
        (6, 8_200),
        (7, 55_092),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::positions as notation;

    #[test]
    fn test_perft_starting_position() {
        let state = GameState::new();

        // Only test shallow depths to keep the suite fast
        for &(depth, expected) in &positions::STARTING_POSITION[..5] {
            let result = perft(&state, depth);
            assert_eq!(
                result, expected,
                "Perft({}) failed: expected {}, got {}",
                depth, expected, result
            );
        }
    }

    #[test]
    fn test_perft_divide() {
        let state = GameState::new();
        let results = perft_divide(&state, 2);

        assert_eq!(results.len(), 4);
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), 12);
    }

    #[test]
    fn test_perft_detailed_matches_perft() {
        let state = GameState::new();
        let detailed = perft_detailed(&state, 3);

        assert_eq!(detailed.nodes, perft(&state, 3));
        assert_eq!(detailed.passes, 0);
        assert_eq!(detailed.game_overs, 0);
    }

    #[test]
    fn test_perft_counts_forced_pass() {
        let state = GameState::from_notation(notation::WHITE_TO_PASS).unwrap();
        // White passes, then Black's only reply is h8
        assert_eq!(perft(&state, 2), 1);
        assert_eq!(perft_detailed(&state, 2).passes, 1);
    }

    #[test]
    fn test_perft_finished_game() {
        let state = GameState::from_notation(notation::FINISHED).unwrap();
        assert_eq!(perft(&state, 1), 0);
        assert_eq!(perft(&state, 0), 1);
    }
}
