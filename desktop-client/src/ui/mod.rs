mod app;
mod board_view;
mod input;

pub use app::Puzzle2048App;
