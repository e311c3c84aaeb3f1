//! # Resource Actor
//!
//! Building blocks for in-process resource stores that are safe to share between
//! concurrently running request handlers without any locks.
//!
//! ## Model
//!
//! A store of entities is owned by exactly one Tokio task, the [`ResourceActor`]. Everyone
//! else holds a [`ResourceClient`] and talks to the actor by message passing. Because the
//! actor handles one request at a time, id assignment and every mutation are serialized, and
//! readers always get a consistent copy of the state at the moment their request was served.
//!
//! The layers:
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its payloads and its hooks.
//! 2. **Runtime** ([`ResourceActor`]) - message loop, ordered store, id counter.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async requests.
//!
//! ## Operations
//!
//! Create, get, list, update and custom actions. There is no removal: an entity, once
//! created, lives as long as its actor. Soft deletion is expressed as an action.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests are processed **sequentially** in arrival order.
//! - Replies are clones; callers never see a reference into the store.
//! - Dropping every client closes the mailbox and the actor exits after logging its final size.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient) for scripting replies and
//! injecting failures without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
