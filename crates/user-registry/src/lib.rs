//! # User Registry
//!
//! An in-memory user registry served over HTTP.
//!
//! - **[user_actor]**: the registry. A [`ResourceActor`](resource_actor::ResourceActor) that
//!   owns every [`User`](model::User) and assigns ids.
//! - **[clients]**: [`UserClient`](clients::UserClient), the only way to reach the registry.
//! - **[http]**: the `/users` router built on axum.
//! - **[lifecycle]**: starts and stops the registry actor.
//! - **[config]** and **[error]**: server settings and startup/shutdown errors.
//!
//! Users are created, read, updated and deactivated. They are never removed.

pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
