use common::games::snake::SessionCommand;
use common::log;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: SessionCommand) {
        if self.tx.send(cmd).is_err() {
            log!("Session is gone, dropping {:?}", cmd);
        }
    }
}
