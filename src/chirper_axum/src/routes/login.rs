//! Login route. Success sets the session cookie.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use chirper_adapters::auth::session::generate_session_cookie;
use chirper_application::{LoginError, LoginUseCase};
use chirper_core::{CredentialStore, EmailClient, Password, TokenStore, Username};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip(state, jar, request))]
pub async fn login<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, impl IntoResponse), LoginApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    // a malformed username can't belong to any account
    let username =
        Username::try_from(request.username).map_err(|_| LoginApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| LoginApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(state.credential_store.clone());
    let account = use_case.execute(username, password).await?;

    let cookie = generate_session_cookie(&account.username, &state.session)
        .map_err(|e| LoginApiError::Failed(e.to_string()))?;

    Ok((
        jar.add(cookie),
        Json(serde_json::json!({
            "status": "success",
            "username": account.username.as_str()
        })),
    ))
}

#[derive(Debug, Error)]
pub enum LoginApiError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is not active")]
    AccountInactive,

    #[error("Login failed: {0}")]
    Failed(String),
}

impl From<LoginError> for LoginApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => LoginApiError::InvalidCredentials,
            LoginError::AccountInactive => LoginApiError::AccountInactive,
            other => LoginApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for LoginApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            LoginApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            LoginApiError::AccountInactive => (
                StatusCode::FORBIDDEN,
                "Account is not active".to_string(),
            ),
            LoginApiError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
