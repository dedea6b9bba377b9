use crate::evaluation::score;
use crate::SearchState;
use othello_core::Move;
use tracing::{debug, trace};

/// Fixed lookahead of the minimax agent, in plies.
pub const SEARCH_DEPTH: u8 = 4;

/// Value of a node with no legal moves, whichever side is to move.
pub const NO_MOVES_SCORE: i32 = i32::MAX - 1;

/// Result of evaluating one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The node was scored.
    Value(i32),
    /// The node had no legal moves and the game is over.
    GameEnded,
}

impl Outcome {
    /// The number the parent compares against its bounds. A finished game
    /// counts as `NO_MOVES_SCORE`, not as a win or loss for either side.
    pub const fn value(self) -> i32 {
        match self {
            Outcome::Value(v) => v,
            Outcome::GameEnded => NO_MOVES_SCORE,
        }
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    /// Nodes that reported `Outcome::GameEnded`, at any depth.
    pub game_endings: u64,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// What the root itself reported.
    pub outcome: Outcome,
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
}

impl SearchResult {
    /// True if the searched position itself is a finished game. Finished
    /// games deeper in the tree only show up in `stats.game_endings`.
    pub fn game_ended(&self) -> bool {
        self.outcome == Outcome::GameEnded
    }
}

/// One node of the minimax tree.
///
/// Owns its own copy of the state and its `[alpha, beta]` window. Children
/// are built and dropped inside `evaluate`; nothing outlives the call.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    best_move: Option<Move>,
}

impl<S: SearchState> SearchNode<S> {
    pub fn new(state: S, alpha: i32, beta: i32, maximizing: bool) -> Self {
        Self {
            state,
            alpha,
            beta,
            maximizing,
            best_move: None,
        }
    }

    /// Root node: maximizing, with the widest possible window.
    pub fn root(state: S) -> Self {
        Self::new(state, i32::MIN, i32::MAX, true)
    }

    /// The move chosen by the last `evaluate`, if the state had any.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    pub fn beta(&self) -> i32 {
        self.beta
    }

    /// Minimax with alpha-beta pruning, `depth` plies deep.
    ///
    /// The chosen move starts as the first legal move and only changes on a
    /// strict improvement of the bound, so ties go to the earliest move. At
    /// depth zero the node scores that first legal move, whichever move led
    /// to the node.
    pub fn evaluate(&mut self, depth: u8, stats: &mut SearchStats) -> Outcome {
        stats.nodes += 1;

        let moves = self.state.valid_moves();
        let Some(&first) = moves.first() else {
            if self.state.is_terminal() {
                stats.game_endings += 1;
                return Outcome::GameEnded;
            }
            return Outcome::Value(NO_MOVES_SCORE);
        };
        self.best_move = Some(first);

        if depth == 0 {
            return Outcome::Value(score(&first));
        }

        for mv in moves {
            let mut child = SearchNode::new(self.state.play(&mv), self.alpha, self.beta, !self.maximizing);
            let value = child.evaluate(depth - 1, stats).value();

            if self.maximizing {
                if value > self.alpha {
                    self.alpha = value;
                    self.best_move = Some(mv);
                }
            } else if value < self.beta {
                self.beta = value;
                self.best_move = Some(mv);
            }

            if self.alpha > self.beta {
                trace!(depth, alpha = self.alpha, beta = self.beta, "cutoff");
                stats.cutoffs += 1;
                break;
            }
        }

        Outcome::Value(if self.maximizing { self.alpha } else { self.beta })
    }
}

/// Searches `state` to a fixed depth from a maximizing root.
pub fn search<S: SearchState>(state: &S, depth: u8) -> SearchResult {
    let mut stats = SearchStats::default();
    let mut root = SearchNode::root(state.clone());
    let outcome = root.evaluate(depth, &mut stats);

    let result = SearchResult {
        best_move: root.best_move(),
        outcome,
        score: outcome.value(),
        depth,
        stats,
    };

    debug!(
        depth,
        score = result.score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        game_endings = stats.game_endings,
        best_move = ?result.best_move.map(|mv| mv.to),
        "search complete"
    );

    result
}
