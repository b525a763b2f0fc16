//! Core Connect Four logic: the drop board, per-player piece sets with win
//! detection, and the turn controller that ties them together.

mod board;
mod coord;
mod pieces;
mod player;
mod state;

pub use board::{Board, Cell};
pub use coord::{Coordinate, Direction, COLS, ROWS, RUN_LENGTH};
pub use pieces::PieceSet;
pub use player::{Player, PlayerId};
pub use state::{Game, GameResult, MoveOutcome, Phase};
