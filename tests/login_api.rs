//! `/api/login` handler behaviour against configured credentials.

#![cfg(feature = "server")]

use admin_console::auth::{login_handler, AuthError, Credentials, LoginRequest};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

fn creds() -> Arc<Credentials> {
    Arc::new(Credentials::from_password("admin", "correct horse"))
}

fn request(username: &str, password: &str) -> Json<LoginRequest> {
    Json(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[test]
fn accepts_configured_account() {
    let result = tokio_test::block_on(login_handler(
        State(creds()),
        request("admin", "correct horse"),
    ));
    let Json(resp) = result.expect("login should succeed");
    assert_eq!(resp.username, "admin");
}

#[test]
fn wrong_password_is_unauthorized() {
    let result = tokio_test::block_on(login_handler(State(creds()), request("admin", "battery")));
    let err = result.expect_err("login should fail");
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn blank_fields_are_bad_request() {
    let result = tokio_test::block_on(login_handler(State(creds()), request("", "")));
    let err = result.expect_err("login should fail");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}
