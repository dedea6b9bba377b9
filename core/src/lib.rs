pub mod board;
pub mod error;
pub mod game_state;
pub mod host;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::GameError;
pub use game_state::*;
pub use host::{Match, MatchStatus, Seat};
pub use move_gen::*;
pub use notation::{parse_square, positions, NotationError};
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
