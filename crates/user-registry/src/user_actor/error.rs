//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No user was ever created with this id.
    #[error("user with ID {0} not found")]
    NotFound(String),

    /// The registry actor could not be reached or dropped the request.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
