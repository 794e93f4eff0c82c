use super::types::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameInput {
    Move(Direction),
    Restart,
}

/// Collapses inputs that queued up while a turn was being processed.
///
/// A restart discards whatever moves preceded it, so at most one restart is
/// kept. Of the moves after it, only the last one is played: key-repeat bursts
/// behave as a single press of the most recent key.
pub fn coalesce_burst(inputs: impl IntoIterator<Item = GameInput>) -> Vec<GameInput> {
    let mut restart = false;
    let mut last_move = None;

    for input in inputs {
        match input {
            GameInput::Restart => {
                restart = true;
                last_move = None;
            }
            GameInput::Move(_) => last_move = Some(input),
        }
    }

    let mut collapsed = Vec::with_capacity(2);
    if restart {
        collapsed.push(GameInput::Restart);
    }
    collapsed.extend(last_move);
    collapsed
}
