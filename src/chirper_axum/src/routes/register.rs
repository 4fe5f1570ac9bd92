//! Registration route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use chirper_application::{RegisterError, RegisterUseCase};
use chirper_core::{
    CredentialStore, Email, EmailClient, NewAccount, Password, PersonName, Profile, TokenStore,
    Username,
};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Secret<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Secret<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

#[tracing::instrument(name = "Register", skip(state, request))]
pub async fn register<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, RegisterApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let account = NewAccount {
        username: Username::try_from(request.username)
            .map_err(|e| RegisterApiError::Validation(e.to_string()))?,
        email: Email::try_from(request.email)
            .map_err(|e| RegisterApiError::Validation(e.to_string()))?,
        password: Password::try_from(request.password)
            .map_err(|e| RegisterApiError::Validation(e.to_string()))?,
        profile: Profile {
            first_name: PersonName::try_from(request.first_name)
                .map_err(|e| RegisterApiError::Validation(e.to_string()))?,
            last_name: PersonName::try_from(request.last_name)
                .map_err(|e| RegisterApiError::Validation(e.to_string()))?,
            birth_date: request.birth_date,
            avatar: request.avatar,
        },
    };

    let use_case = RegisterUseCase::new(
        state.credential_store.clone(),
        state.token_store.clone(),
        state.email_client.clone(),
        state.links.clone(),
    );
    use_case.execute(account).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "status": "success",
            "message": "User created successfully"
        })),
    ))
}

#[derive(Debug, Error)]
pub enum RegisterApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Registration failed: {0}")]
    Failed(String),
}

impl From<RegisterError> for RegisterApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UsernameTaken => RegisterApiError::UsernameTaken,
            other => RegisterApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for RegisterApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RegisterApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            RegisterApiError::UsernameTaken => {
                (StatusCode::CONFLICT, "Username already taken".to_string())
            }
            RegisterApiError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
