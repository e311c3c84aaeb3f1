//! HTTP server module.
//!
//! Translates requests on `/users` into [`UserClient`](crate::clients::UserClient) calls and
//! their results back into responses. Handlers hold no state of their own; the registry
//! lives in the User actor.
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | list / get | 200 | JSON |
//! | create | 201 | JSON |
//! | update / deactivate | 200 | confirmation text |
//! | bad input | 400 | fixed message |
//! | unknown id | 404 | `user with ID {id} not found` |
//! | other method | 405 | `Method not allowed` |
//! | registry stopped | 503 | error text |

mod error;
mod middleware;
pub mod routes;

pub use error::ApiError;
pub use middleware::create_trace_layer;
pub use routes::{create_router, AppState};
