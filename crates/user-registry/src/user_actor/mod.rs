//! # User Actor
//!
//! The registry proper: one [`ResourceActor`] owning every [`User`] record.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`], currently only soft deletion
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use user_registry::user_actor;
//! use user_registry::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     };
//!     let user = client.create_user(params).await?;
//!     client.deactivate_user(user.id).await?;
//!     assert!(!client.get_user(user.id).await?.active);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: `Context = ()`
//! - **Sequential ids**: 1, 2, 3, ... assigned by the actor, never reused
//! - **Soft delete only**: records are deactivated, never removed

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
///
/// `capacity` is the actor's mailbox size and must be greater than zero.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}
