use common::games::puzzle2048::{GameOutcome, GameSnapshot, RenderSink};
use crate::state::SharedState;

/// Publishes controller output into the state the egui frame loop reads.
#[derive(Clone)]
pub struct LocalRenderSink {
    shared_state: SharedState,
}

impl LocalRenderSink {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl RenderSink for LocalRenderSink {
    fn render(&self, snapshot: &GameSnapshot) {
        self.shared_state.update_snapshot(*snapshot);
    }

    fn show_outcome(&self, outcome: GameOutcome, snapshot: &GameSnapshot) {
        self.shared_state.set_outcome(outcome, *snapshot);
    }

    fn clear(&self) {
        self.shared_state.clear_outcome();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use common::games::puzzle2048::{Board, GameStatus};

    fn snapshot(score: u32) -> GameSnapshot {
        GameSnapshot {
            board: Board::empty(),
            score,
            moves_made: 0,
            highest_tile: 0,
            status: GameStatus::InProgress,
            target_value: 2048,
        }
    }

    #[test]
    fn test_render_publishes_snapshot() {
        let shared_state = SharedState::new();
        let sink = LocalRenderSink::new(shared_state.clone());
        assert_eq!(shared_state.get_state(), AppState::Idle);

        sink.render(&snapshot(8));
        assert_eq!(
            shared_state.get_state(),
            AppState::InGame {
                snapshot: snapshot(8),
                outcome: None
            }
        );
    }

    #[test]
    fn test_outcome_survives_render_until_cleared() {
        let shared_state = SharedState::new();
        let sink = LocalRenderSink::new(shared_state.clone());

        sink.show_outcome(GameOutcome::Lost, &snapshot(100));
        sink.render(&snapshot(100));
        assert!(matches!(
            shared_state.get_state(),
            AppState::InGame {
                outcome: Some(GameOutcome::Lost),
                ..
            }
        ));

        sink.clear();
        sink.render(&snapshot(0));
        assert_eq!(
            shared_state.get_state(),
            AppState::InGame {
                snapshot: snapshot(0),
                outcome: None
            }
        );
    }
}
