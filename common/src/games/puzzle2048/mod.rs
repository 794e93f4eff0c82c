mod board;
mod controller;
mod engine;
mod input;
mod settings;
mod types;

pub use board::{BOARD_SIZE, Board, slide_and_merge_line};
pub use controller::{ControllerState, GameController, RenderSink, TurnOutcome};
pub use engine::BoardEngine;
pub use input::{GameInput, coalesce_burst};
pub use settings::{DEFAULT_FOUR_TILE_PROBABILITY, DEFAULT_TARGET_VALUE, Puzzle2048Settings};
pub use types::{Direction, GameOutcome, GameSnapshot, GameStatus, MoveResult};
