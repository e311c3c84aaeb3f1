//! Error types for running the registry server.
//!
//! Request-level failures live in [`crate::http::ApiError`]; this type covers startup,
//! configuration and shutdown.

use std::io;
use thiserror::Error;

/// The main error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// I/O errors (binding the listener, serving connections)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid values in the environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The registry actor failed or panicked
    #[error("Actor error: {0}")]
    Actor(String),
}

impl ServerError {
    /// Create a config error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an actor error with a message.
    pub fn actor(msg: impl Into<String>) -> Self {
        Self::Actor(msg.into())
    }
}

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
