//! Plays agents against each other through a `Match` host.

use crate::Agent;
use othello_core::{Color, GameError, GameState, Match, Move};
use tracing::{debug, info};

/// Something that happened on a turn, reported to the observer.
#[derive(Debug)]
pub enum TurnEvent<'a> {
    Moved {
        color: Color,
        mv: Move,
        state: &'a GameState,
    },
    Passed {
        color: Color,
    },
    /// The agent to move tore the match down.
    Terminated {
        color: Color,
    },
}

/// Summary of a finished match.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub final_state: GameState,
    pub moves: Vec<Move>,
    /// Set when an agent ended the match through the host.
    pub terminated_by: Option<Color>,
    pub black_discs: u32,
    pub white_discs: u32,
}

impl MatchReport {
    /// The side with more discs, or None on a tie.
    pub fn leader(&self) -> Option<Color> {
        match self.black_discs.cmp(&self.white_discs) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Runs one match from `start` until neither side can move or an agent
/// terminates it. Each turn the agent to move gets a snapshot of the
/// position and the host, and may append one move.
pub fn play_match(
    start: GameState,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    mut observer: impl FnMut(TurnEvent<'_>),
) -> Result<MatchReport, GameError> {
    let mut game = Match::new(start);
    game.register_player(black.name(), Color::Black);
    game.register_player(white.name(), Color::White);
    info!(black = black.name(), white = white.name(), "match started");

    let mut terminated_by = None;

    while game.is_running() {
        let snapshot = game.state().clone();
        let color = snapshot.turn;
        let agent: &mut dyn Agent = match color {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };

        let mut chosen = Vec::with_capacity(1);
        agent.make_move(&snapshot, &mut game, &mut chosen);

        if !game.is_running() {
            debug!(%color, agent = agent.name(), "agent terminated the match");
            terminated_by = Some(color);
            observer(TurnEvent::Terminated { color });
            break;
        }

        match chosen.pop() {
            Some(mv) => {
                game.play(mv)?;
                observer(TurnEvent::Moved {
                    color,
                    mv,
                    state: game.state(),
                });
            }
            None if snapshot.is_game_over() => break,
            None => {
                game.pass()?;
                observer(TurnEvent::Passed { color });
            }
        }
    }

    let final_state = game.state().clone();
    let report = MatchReport {
        black_discs: final_state.disc_count(Color::Black),
        white_discs: final_state.disc_count(Color::White),
        moves: game.history().to_vec(),
        final_state,
        terminated_by,
    };
    info!(
        black = report.black_discs,
        white = report.white_discs,
        moves = report.moves.len(),
        "match finished"
    );

    Ok(report)
}
