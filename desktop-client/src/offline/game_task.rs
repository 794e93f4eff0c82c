use common::games::puzzle2048::{GameController, GameInput, RenderSink, TurnOutcome, coalesce_burst};
use common::log;
use tokio::sync::mpsc;

use crate::state::ClientCommand;

/// Owns the controller for the lifetime of the window. Each wake-up handles
/// one burst: the command that woke the task plus everything already queued
/// behind it. Turns never overlap because only this task touches the game.
pub async fn local_game_task<S: RenderSink>(
    mut controller: GameController<S>,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    coalesce_bursts: bool,
) {
    loop {
        let Some(first) = command_rx.recv().await else {
            log!("Command channel closed, stopping game task");
            break;
        };

        let mut burst = vec![first];
        while let Ok(command) = command_rx.try_recv() {
            burst.push(command);
        }

        let mut shutdown = false;
        let mut inputs = Vec::with_capacity(burst.len());
        for command in burst {
            match command {
                ClientCommand::Input(input) => inputs.push(input),
                ClientCommand::Shutdown => {
                    shutdown = true;
                    break;
                }
            }
        }

        let inputs: Vec<GameInput> = if coalesce_bursts {
            coalesce_burst(inputs)
        } else {
            inputs
        };

        for input in inputs {
            if controller.handle_input(input) == TurnOutcome::Busy {
                log!("Dropped {:?}: previous turn still in progress", input);
            }
        }

        if shutdown {
            log!("Shutdown requested, stopping game task");
            break;
        }
    }
}
