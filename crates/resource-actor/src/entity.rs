//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be owned by a [`ResourceActor`](crate::ResourceActor).
//! It names the identifier, the create/update payloads, the custom actions and the error type,
//! and provides the lifecycle hooks the actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//!
//! There is deliberately no delete hook: resources are never removed from an actor's store.
//! Retirement is modelled as an [`ActorEntity::Action`] that flips state on the entity.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Identifiers
/// The actor assigns ids from a `u64` counter that starts at 1 and only grows. `Id` is
/// built with `From<u64>` and stored as the key of an ordered map, so its `Ord`
/// implementation must agree with the numeric order of the counter. Iterating the store
/// then yields entities in creation order.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. `Context` is injected into
/// every hook by [`ResourceActor::run`](crate::ResourceActor::run); use `()` if nothing is needed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond create/read/update.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// One error enum for the whole entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its freshly assigned id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
