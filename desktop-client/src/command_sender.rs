use tokio::sync::mpsc;
use crate::state::ClientCommand;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    /// Fire and forget: once the game task has stopped there is nobody left
    /// to act on the command.
    pub fn send(&self, cmd: ClientCommand) {
        let _ = self.tx.send(cmd);
    }
}
