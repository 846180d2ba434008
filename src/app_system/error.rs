use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors raised while starting, running or stopping the service.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to seed catalog: {0}")]
    Seed(#[from] FrameworkError),
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
