//! HTTP route definitions.
//!
//! `/users` is a single resource path multiplexed on the method:
//!
//! | Method | Handler | Input |
//! |---|---|---|
//! | GET | [`list_or_get_users`] | optional `id` query parameter |
//! | POST | [`create_user`] | JSON body `{name, email}` |
//! | PUT | [`update_user`] | `id` query parameter + JSON body |
//! | DELETE | [`deactivate_user`] | `id` query parameter |
//! | anything else, HEAD included | [`method_not_allowed`] | |

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::error::ApiError;
use super::middleware::create_trace_layer;
use crate::clients::UserClient;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;

const ID_REQUIRED: &str = "User ID is required";
const INVALID_ID: &str = "Invalid user ID";
const INVALID_JSON: &str = "Invalid JSON";
const FIELDS_REQUIRED: &str = "Name and email are required";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    /// Apply the create-time field check to updates as well
    pub require_fields_on_update: bool,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(users: UserClient) -> Self {
        Self {
            users,
            require_fields_on_update: false,
            start_time: Instant::now(),
        }
    }

    pub fn with_required_fields_on_update(mut self, required: bool) -> Self {
        self.require_fields_on_update = required;
        self
    }
}

/// Query string of `/users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}

impl UserQuery {
    /// The raw `id` parameter; `?id=` counts as absent.
    fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|raw| !raw.is_empty())
    }
}

/// JSON body of POST and PUT. Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    /// Decodes a body; a JSON `null` is an empty payload.
    fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                debug!(error = %e, "Rejected request body");
                ApiError::BadRequest(INVALID_JSON)
            })
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_or_get_users)
                .post(create_user)
                .put(update_user)
                .delete(deactivate_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(create_trace_layer())
        .with_state(state)
}

/// Parses an `id` parameter. Anything that is not a base-10 integer is a bad request.
fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest(INVALID_ID))
}

/// Negative ids are well-formed but never issued, so they are reported as not found.
fn to_user_id(id: i64) -> Result<UserId, ApiError> {
    u64::try_from(id)
        .map(UserId)
        .map_err(|_| UserError::NotFound(id.to_string()).into())
}

fn require_user_id(query: &UserQuery) -> Result<i64, ApiError> {
    query
        .id()
        .ok_or(ApiError::BadRequest(ID_REQUIRED))
        .and_then(parse_user_id)
}

/// `GET /users` lists every user, `GET /users?id=N` returns one.
pub async fn list_or_get_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Response, ApiError> {
    match query.id() {
        Some(raw) => {
            let id = to_user_id(parse_user_id(raw)?)?;
            let user = state.users.get_user(id).await?;
            Ok(Json(user).into_response())
        }
        None => {
            let users = state.users.list_users().await?;
            Ok(Json(users).into_response())
        }
    }
}

/// `POST /users` registers a user.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = UserPayload::from_json(&body)?;
    if !payload.is_complete() {
        return Err(ApiError::BadRequest(FIELDS_REQUIRED));
    }

    let user = state
        .users
        .create_user(UserCreate {
            name: payload.name,
            email: payload.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /users?id=N` replaces name and email.
///
/// Unlike creation, empty values are accepted unless `require_fields_on_update` is set.
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let id = require_user_id(&query)?;
    let payload = UserPayload::from_json(&body)?;
    if state.require_fields_on_update && !payload.is_complete() {
        return Err(ApiError::BadRequest(FIELDS_REQUIRED));
    }

    state
        .users
        .update_user(
            to_user_id(id)?,
            UserUpdate {
                name: payload.name,
                email: payload.email,
            },
        )
        .await?;
    Ok("User updated successfully")
}

/// `DELETE /users?id=N` deactivates a user; the record is kept.
pub async fn deactivate_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<&'static str, ApiError> {
    let id = to_user_id(require_user_id(&query)?)?;
    state.users.deactivate_user(id).await?;
    Ok("User deactivated successfully")
}

/// Any other method on `/users`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
