mod game_task;
mod render_sink;

pub use game_task::local_game_task;
pub use render_sink::LocalRenderSink;
