use crate::clients::UserClient;
use crate::error::{Result, ServerError};
use crate::model::{User, UserCreate};
use tracing::{error, info};

/// Users created when `seed_sample_users` is enabled.
const SAMPLE_USERS: [(&str, &str); 3] = [
    ("Alice Johnson", "alice@example.com"),
    ("Bob Smith", "bob@example.com"),
    ("Charlie Brown", "charlie@example.com"),
];

/// The runtime owner of the registry actor.
///
/// `RegistrySystem` starts the User actor, hands out its client and stops it again.
///
/// # Example
///
/// ```rust
/// use user_registry::lifecycle::RegistrySystem;
///
/// #[tokio::main]
/// async fn main() {
///     let system = RegistrySystem::new(32);
///     let users = system.seed_sample_users().await.unwrap();
///     assert_eq!(users.len(), 3);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    /// Spawns the User actor with a mailbox of `capacity` requests.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(capacity: usize) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(capacity);
        let handle = tokio::spawn(user_actor.run(()));

        Self {
            user_client,
            handle,
        }
    }

    /// Creates the sample users, in order, and returns them.
    pub async fn seed_sample_users(&self) -> Result<Vec<User>> {
        let mut created = Vec::with_capacity(SAMPLE_USERS.len());
        for (name, email) in SAMPLE_USERS {
            let user = self
                .user_client
                .create_user(UserCreate {
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .await
                .map_err(|e| ServerError::actor(e.to_string()))?;
            created.push(user);
        }
        info!(count = created.len(), "Seeded sample users");
        Ok(created)
    }

    /// Gracefully shuts down the registry.
    ///
    /// Drops this system's client and waits for the actor to drain its mailbox. Clones of
    /// the client still held elsewhere (e.g. by the HTTP router) keep the actor alive, so
    /// drop those first.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down registry...");

        // Closing the last sender makes the actor's recv() return None
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(ServerError::actor(format!("Actor task failed: {:?}", e)));
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
