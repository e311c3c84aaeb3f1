//! [`ActorEntity`] implementation for [`User`].

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    /// Builds an active user stamped with the current time.
    ///
    /// Field presence is checked by the caller, so this never fails.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Replaces `name` and `email`. Empty strings are stored as given.
    async fn on_update(
        &mut self,
        update: UserUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.name = update.name;
        self.email = update.email;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {
            UserAction::Deactivate => {
                self.active = false;
                Ok(())
            }
        }
    }
}
