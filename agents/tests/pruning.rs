//! Alpha-beta must agree with plain minimax on arbitrary game trees.

use othello_agents::{score, search, SearchState, NO_MOVES_SCORE};
use othello_core::{BitBoard, Move, Square};
use proptest::prelude::*;

/// A synthetic game tree derived from a seed. Each node id hashes to its
/// branching factor, its children's ids, and the destination of each move.
/// The child id rides along in the move's flips field.
#[derive(Debug, Clone)]
struct SeededTree {
    id: u64,
}

fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

impl SearchState for SeededTree {
    fn valid_moves(&self) -> Vec<Move> {
        let h = mix(self.id);
        let branching = if (h >> 16) % 6 == 0 { 0 } else { 1 + h % 4 };
        (0..branching)
            .map(|i| {
                let child = mix(self.id ^ (i + 1).wrapping_mul(0xA24B_AED4_963E_E407));
                let to = Square::from_index((mix(child) % 64) as u8).unwrap();
                Move::new(to, BitBoard(child))
            })
            .collect()
    }

    fn is_terminal(&self) -> bool {
        (mix(self.id) >> 40) & 1 == 1
    }

    fn play(&self, mv: &Move) -> Self {
        SeededTree { id: mv.flips.0 }
    }
}

/// Exhaustive minimax with the same leaf, sentinel and tie rules, and no
/// pruning. Returns (value, first move reaching the best value, nodes).
fn minimax(state: &SeededTree, depth: u8, maximizing: bool) -> (i32, Option<Move>, u64) {
    let moves = state.valid_moves();
    let Some(&first) = moves.first() else {
        return (NO_MOVES_SCORE, None, 1);
    };
    if depth == 0 {
        return (score(&first), Some(first), 1);
    }

    let mut best: Option<(i32, Move)> = None;
    let mut nodes = 1;
    for mv in moves {
        let (value, _, visited) = minimax(&state.play(&mv), depth - 1, !maximizing);
        nodes += visited;
        let improves = match best {
            None => true,
            Some((current, _)) if maximizing => value > current,
            Some((current, _)) => value < current,
        };
        if improves {
            best = Some((value, mv));
        }
    }

    let (value, mv) = best.unwrap();
    (value, Some(mv), nodes)
}

proptest! {
    #[test]
    fn prop_pruning_matches_exhaustive_minimax(seed in any::<u64>(), depth in 0u8..=5) {
        let root = SeededTree { id: seed };
        let (expected, expected_move, exhaustive_nodes) = minimax(&root, depth, true);

        let result = search(&root, depth);

        prop_assert_eq!(result.score, expected);
        prop_assert_eq!(result.best_move, expected_move);
        prop_assert!(result.stats.nodes <= exhaustive_nodes);
    }

    #[test]
    fn prop_chosen_move_is_legal(seed in any::<u64>(), depth in 0u8..=4) {
        let root = SeededTree { id: seed };
        let result = search(&root, depth);

        match result.best_move {
            Some(mv) => prop_assert!(root.valid_moves().contains(&mv)),
            None => prop_assert!(root.valid_moves().is_empty()),
        }
    }

    #[test]
    fn prop_search_is_deterministic(seed in any::<u64>(), depth in 0u8..=4) {
        let root = SeededTree { id: seed };
        let first = search(&root, depth);
        let second = search(&root, depth);

        prop_assert_eq!(first.best_move, second.best_move);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.stats, second.stats);
    }
}

#[test]
fn depth_zero_scores_first_move_regardless_of_branch() {
    // Find a seed whose root has at least two moves with different weights
    let root = (0u64..)
        .map(|id| SeededTree { id })
        .find(|tree| {
            let moves = tree.valid_moves();
            moves.len() >= 2 && score(&moves[0]) != score(&moves[1])
        })
        .unwrap();

    let moves = root.valid_moves();
    let result = search(&root, 0);

    assert_eq!(result.score, score(&moves[0]));
    assert_eq!(result.best_move, Some(moves[0]));
    assert_eq!(result.stats.nodes, 1);
}
