//! # Generic Messages
//!
//! Requests travelling from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor), each with a oneshot channel for the reply.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: assigns the next id and stores a new entity; replies with a copy of it.
/// - **Get**: fetches one entity by id; `None` if the id was never issued.
/// - **List**: snapshot of every entity in creation order.
/// - **Update**: applies [`ActorEntity::Update`] in place; replies with the new state.
/// - **Action**: runs a custom [`ActorEntity::Action`].
///
/// There is no delete request. Entities stay in the store for the actor's lifetime.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
