//! Login: credential check and the `/api/login` endpoint.
//!
//! The console has a single administrator account whose password is stored
//! as a hex SHA-256 digest in the server configuration. The browser posts a
//! `LoginRequest`, the server answers with the username or an error body.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub username: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingField,
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Hex-encoded SHA-256 of a password.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// The configured administrator account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password_sha256: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password_sha256: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_sha256: password_sha256.into().to_ascii_lowercase(),
        }
    }

    pub fn from_password(username: impl Into<String>, password: &str) -> Self {
        Self::new(username, password_digest(password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn verify(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if username != self.username || password_digest(&request.password) != self.password_sha256 {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(LoginResponse {
            username: self.username.clone(),
        })
    }
}

#[cfg(feature = "server")]
mod server {
    use super::*;
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };
    use std::sync::Arc;

    impl IntoResponse for AuthError {
        fn into_response(self) -> Response {
            let status = match self {
                AuthError::MissingField => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            };
            (
                status,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response()
        }
    }

    /// POST /api/login
    pub async fn login_handler(
        State(credentials): State<Arc<Credentials>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, AuthError> {
        match credentials.verify(&request) {
            Ok(response) => {
                tracing::info!("Login succeeded for '{}'", response.username);
                Ok(Json(response))
            }
            Err(e) => {
                tracing::warn!("Login rejected for '{}': {}", request.username, e);
                Err(e)
            }
        }
    }
}

#[cfg(feature = "server")]
pub use server::login_handler;
