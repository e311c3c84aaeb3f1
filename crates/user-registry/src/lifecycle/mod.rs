//! # System Lifecycle
//!
//! Starting, wiring and stopping the registry.
//!
//! ## Startup
//!
//! [`RegistrySystem::new`] spawns the User actor on the current runtime and keeps its client.
//! The HTTP layer receives a clone of that client; the actor itself is never shared.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - the HTTP server finishes in-flight requests and drops its router,
//!    and with it the router's client clone.
//! 2. **Drop the last client** - [`RegistrySystem::shutdown`] drops its own client.
//! 3. **Actor drains** - `recv()` returns `None` once the mailbox is empty, the actor logs
//!    its final size and exits.
//! 4. **Await** - the actor's task handle is joined; a panic becomes a `ServerError::Actor`.

pub mod registry_system;

pub use registry_system::*;
