//! State shared between a host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use odin_core::commands::ControlCommand;
use odin_core::state::MissionSnapshot;

use crate::error::AppError;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control command to forward to mission control.
    Control(ControlCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, for synchronous polling.
pub type LatestSnapshot = Arc<Mutex<Option<MissionSnapshot>>>;

/// Host-side handle to a running game loop.
pub struct LoopHandle {
    pub(crate) command_tx: mpsc::Sender<LoopCommand>,
    pub(crate) thread: JoinHandle<Result<(), AppError>>,
}

impl LoopHandle {
    pub fn send(&self, command: ControlCommand) -> Result<(), AppError> {
        self.command_tx
            .send(LoopCommand::Control(command))
            .map_err(|_| AppError::LoopClosed)
    }

    /// Ask the loop to stop and wait for it. Returns the loop's own result.
    pub fn shutdown(self) -> Result<(), AppError> {
        // A loop that already exited has dropped its receiver; that is fine here.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.thread.join().map_err(|_| AppError::LoopPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Control(ControlCommand::Start)).unwrap();
        tx.send(LoopCommand::Control(ControlCommand::SetTimeScale { scale: 2.0 }))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Control(ControlCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Control(ControlCommand::SetTimeScale { .. })
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_latest_snapshot_starts_empty() {
        let latest = LatestSnapshot::default();
        assert!(latest.lock().unwrap().is_none());
    }
}
