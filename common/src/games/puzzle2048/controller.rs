use super::board::Board;
use super::engine::BoardEngine;
use super::input::GameInput;
use super::types::{Direction, GameOutcome, GameSnapshot, GameStatus};
use crate::log;

/// Presentation side of the game. The controller only ever writes to it.
pub trait RenderSink {
    fn render(&self, snapshot: &GameSnapshot);

    fn show_outcome(&self, outcome: GameOutcome, snapshot: &GameSnapshot);

    /// Drops any win/lose message before a fresh board is rendered.
    fn clear(&self);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControllerState {
    Idle,
    AwaitingInput,
    Processing,
    Terminal(GameOutcome),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnOutcome {
    Started,
    Moved { score_delta: u32, status: GameStatus },
    Unchanged,
    Ignored,
    Busy,
}

#[derive(Clone, Copy, Debug)]
struct GameState {
    board: Board,
    score: u32,
    moves_made: u32,
    status: GameStatus,
}

impl GameState {
    fn empty() -> Self {
        Self {
            board: Board::empty(),
            score: 0,
            moves_made: 0,
            status: GameStatus::InProgress,
        }
    }
}

pub struct GameController<S: RenderSink> {
    engine: BoardEngine,
    sink: S,
    state: ControllerState,
    game: GameState,
}

impl<S: RenderSink> GameController<S> {
    /// The controller starts `Idle`; nothing is played until the first restart.
    pub fn new(engine: BoardEngine, sink: S) -> Self {
        Self {
            engine,
            sink,
            state: ControllerState::Idle,
            game: GameState::empty(),
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.game.board,
            score: self.game.score,
            moves_made: self.game.moves_made,
            highest_tile: self.game.board.highest_tile(),
            status: self.game.status,
            target_value: self.engine.settings().target_value,
        }
    }

    pub fn handle_input(&mut self, input: GameInput) -> TurnOutcome {
        match input {
            GameInput::Restart => {
                self.restart();
                TurnOutcome::Started
            }
            GameInput::Move(direction) => self.play_turn(direction),
        }
    }

    /// Valid from any state.
    pub fn restart(&mut self) {
        self.game = GameState {
            board: self.engine.reset(),
            ..GameState::empty()
        };
        self.state = ControllerState::AwaitingInput;

        log!(
            "New game started (seed {}, target {})",
            self.engine.seed(),
            self.engine.settings().target_value
        );

        self.sink.clear();
        self.sink.render(&self.snapshot());
    }

    fn play_turn(&mut self, direction: Direction) -> TurnOutcome {
        match self.state {
            ControllerState::AwaitingInput => {}
            ControllerState::Processing => return TurnOutcome::Busy,
            ControllerState::Idle | ControllerState::Terminal(_) => return TurnOutcome::Ignored,
        }

        self.state = ControllerState::Processing;

        let result = self.engine.apply_move(&self.game.board, direction);
        if !result.changed {
            self.state = ControllerState::AwaitingInput;
            return TurnOutcome::Unchanged;
        }

        let board = self.engine.spawn_tile(&result.board);
        let status = self.engine.is_terminal(&board);
        self.game = GameState {
            board,
            score: self.game.score + result.score_delta,
            moves_made: self.game.moves_made + 1,
            status,
        };

        let snapshot = self.snapshot();
        self.sink.render(&snapshot);

        self.state = match status.outcome() {
            Some(outcome) => {
                log!(
                    "Game over ({:?}): score {}, highest tile {}, moves {}",
                    outcome,
                    snapshot.score,
                    snapshot.highest_tile,
                    snapshot.moves_made
                );
                self.sink.show_outcome(outcome, &snapshot);
                ControllerState::Terminal(outcome)
            }
            None => ControllerState::AwaitingInput,
        };

        TurnOutcome::Moved {
            score_delta: result.score_delta,
            status,
        }
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.game.board = board;
        self.game.status = self.engine.is_terminal(&board);
    }

    #[cfg(test)]
    fn set_state(&mut self, state: ControllerState) {
        self.state = state;
    }
}
