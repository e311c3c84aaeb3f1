mod common;

use axum::http::{Method, StatusCode};
use common::{app, app_for, app_with, send};
use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;
use user_registry::clients::UserClient;
use user_registry::model::User;

/// The full create → read → update → deactivate flow over HTTP.
#[tokio::test]
async fn test_end_to_end_user_lifecycle() {
    let (app, _system) = app();

    let created = send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Alice","email":"a@x.com"}"#),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.content_type.as_deref(), Some("application/json"));
    let alice = created.json();
    assert_eq!(alice["id"], 1);
    assert_eq!(alice["name"], "Alice");
    assert_eq!(alice["email"], "a@x.com");
    assert_eq!(alice["active"], true);
    assert!(alice["created_at"].is_string());

    let fetched = send(&app, Method::GET, "/users?id=1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), alice);

    let updated = send(
        &app,
        Method::PUT,
        "/users?id=1",
        Some(r#"{"name":"Alicia","email":"a2@x.com"}"#),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body, "User updated successfully");
    assert!(updated
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/plain")));

    let after_update = send(&app, Method::GET, "/users?id=1", None).await.json();
    assert_eq!(after_update["name"], "Alicia");
    assert_eq!(after_update["email"], "a2@x.com");
    assert_eq!(after_update["created_at"], alice["created_at"]);
    assert_eq!(after_update["active"], true);

    let deactivated = send(&app, Method::DELETE, "/users?id=1", None).await;
    assert_eq!(deactivated.status, StatusCode::OK);
    assert_eq!(deactivated.body, "User deactivated successfully");

    let after_delete = send(&app, Method::GET, "/users?id=1", None).await;
    assert_eq!(after_delete.status, StatusCode::OK);
    assert_eq!(after_delete.json()["active"], false);
    assert_eq!(after_delete.json()["name"], "Alicia");

    let missing = send(&app, Method::GET, "/users?id=99", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body, "user with ID 99 not found");

    let empty_name = send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"","email":"x"}"#),
    )
    .await;
    assert_eq!(empty_name.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_name.body, "Name and email are required");
}

#[tokio::test]
async fn test_list_users_in_creation_order() {
    let (app, _system) = app();

    let empty = send(&app, Method::GET, "/users", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, "[]");

    for (name, email) in [("Ann", "ann@x.com"), ("Ben", "ben@x.com"), ("Cal", "cal@x.com")] {
        let body = format!(r#"{{"name":"{name}","email":"{email}"}}"#);
        let res = send(&app, Method::POST, "/users", Some(&body)).await;
        assert_eq!(res.status, StatusCode::CREATED);
    }
    send(&app, Method::DELETE, "/users?id=2", None).await;

    let listed = send(&app, Method::GET, "/users", None).await.json();
    let users = listed.as_array().unwrap();
    assert_eq!(users.len(), 3);
    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ann", "Ben", "Cal"]);
    assert_eq!(users[1]["active"], false);

    // An empty id parameter means "no id"
    let also_listed = send(&app, Method::GET, "/users?id=", None).await;
    assert_eq!(also_listed.json(), listed);
}

#[tokio::test]
async fn test_get_rejects_bad_ids() {
    let (app, _system) = app();

    let res = send(&app, Method::GET, "/users?id=abc", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid user ID");

    let res = send(&app, Method::GET, "/users?id=0", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "user with ID 0 not found");

    let res = send(&app, Method::GET, "/users?id=-1", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_bad_bodies() {
    let (app, _system) = app();

    let res = send(&app, Method::POST, "/users", Some("{\"name\":")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid JSON");

    let res = send(&app, Method::POST, "/users", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid JSON");

    let res = send(&app, Method::POST, "/users", Some(r#"{"name":"Bob"}"#)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name and email are required");

    // Nothing was stored, so the next user still gets id 1
    let res = send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Bob","email":"b@x.com"}"#),
    )
    .await;
    assert_eq!(res.json()["id"], 1);
}

#[tokio::test]
async fn test_update_checks_in_order() {
    let (app, _system) = app();
    let body = Some(r#"{"name":"N","email":"e"}"#);

    let res = send(&app, Method::PUT, "/users", body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "User ID is required");

    // The id is checked before the body
    let res = send(&app, Method::PUT, "/users?id=x", Some("garbage")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid user ID");

    let res = send(&app, Method::PUT, "/users?id=5", Some("garbage")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid JSON");

    // A negative id is well-formed, so the body is still checked before existence
    let res = send(&app, Method::PUT, "/users?id=-1", Some("garbage")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid JSON");

    let res = send(&app, Method::PUT, "/users?id=-1", body).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "user with ID -1 not found");

    let res = send(&app, Method::PUT, "/users?id=5", body).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "user with ID 5 not found");
}

/// Creation requires a name and an email, updates do not. Both behaviors are kept on
/// purpose; `test_strict_update_validation` covers the opt-in alternative.
#[tokio::test]
async fn test_update_accepts_empty_fields_unlike_create() {
    let (app, _system) = app();
    send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Dee","email":"d@x.com"}"#),
    )
    .await;

    let res = send(
        &app,
        Method::PUT,
        "/users?id=1",
        Some(r#"{"name":"","email":""}"#),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    let user = send(&app, Method::GET, "/users?id=1", None).await.json();
    assert_eq!(user["name"], "");
    assert_eq!(user["email"], "");
}

#[tokio::test]
async fn test_null_body_is_an_empty_payload() {
    let (app, _system) = app();

    let res = send(&app, Method::POST, "/users", Some("null")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name and email are required");

    send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Fay","email":"f@x.com"}"#),
    )
    .await;
    let res = send(&app, Method::PUT, "/users?id=1", Some("null")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "User updated successfully");

    let user = send(&app, Method::GET, "/users?id=1", None).await.json();
    assert_eq!(user["name"], "");
    assert_eq!(user["email"], "");
}

#[tokio::test]
async fn test_strict_update_validation() {
    let (app, _system) = app_with(true);
    send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Dee","email":"d@x.com"}"#),
    )
    .await;

    let res = send(&app, Method::PUT, "/users?id=1", Some(r#"{"name":"Dee"}"#)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name and email are required");

    let res = send(&app, Method::PUT, "/users?id=-4", Some(r#"{"name":"Dee"}"#)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name and email are required");

    let user = send(&app, Method::GET, "/users?id=1", None).await.json();
    assert_eq!(user["email"], "d@x.com");
}

#[tokio::test]
async fn test_deactivate_errors_and_repeats() {
    let (app, _system) = app();

    let res = send(&app, Method::DELETE, "/users", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "User ID is required");

    let res = send(&app, Method::DELETE, "/users?id=one", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Invalid user ID");

    let res = send(&app, Method::DELETE, "/users?id=1", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    send(
        &app,
        Method::POST,
        "/users",
        Some(r#"{"name":"Eve","email":"e@x.com"}"#),
    )
    .await;
    for _ in 0..2 {
        let res = send(&app, Method::DELETE, "/users?id=1", None).await;
        assert_eq!(res.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    let (app, _system) = app();

    let res = send(&app, Method::PATCH, "/users?id=1", Some("{}")).await;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.body, "Method not allowed");

    // HEAD is not answered by the GET handler
    let res = send(&app, Method::HEAD, "/users", None).await;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_registry_unavailable() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    let app = app_for(UserClient::new(mock.client()));

    let res = send(&app, Method::GET, "/users", None).await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.body, "Actor communication error: Actor closed");
    mock.verify();
}

#[tokio::test]
async fn test_health() {
    let (app, _system) = app();

    let res = send(&app, Method::GET, "/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "healthy");
}
