use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
