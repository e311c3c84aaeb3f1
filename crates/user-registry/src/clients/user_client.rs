//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and turns framework replies into [`UserError`]s.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    /// Registers a user and returns the stored record.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches one user; an id that was never issued is [`UserError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// All users, oldest first.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    /// Overwrites name and email of an existing user.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Soft-deletes a user.
    #[instrument(skip(self))]
    pub async fn deactivate_user(&self, id: UserId) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Deactivate)
            .await
            .map_err(Self::map_error)
    }
}
