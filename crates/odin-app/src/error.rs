use std::path::PathBuf;

use thiserror::Error;

use odin_core::error::TrajectoryError;

/// Errors raised by the mission host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown trajectory '{0}'")]
    UnknownTrajectory(String),

    #[error("unknown hazard '{0}'")]
    UnknownHazard(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("game loop is not running")]
    LoopClosed,

    #[error("game loop thread panicked")]
    LoopPanicked,

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}
