use super::board::Board;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(GameOutcome::Won),
            GameStatus::Lost => Some(GameOutcome::Lost),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOutcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveResult {
    pub board: Board,
    pub score_delta: u32,
    pub changed: bool,
}

/// Everything a render sink needs to draw one frame of the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    pub moves_made: u32,
    pub highest_tile: u32,
    pub status: GameStatus,
    pub target_value: u32,
}
