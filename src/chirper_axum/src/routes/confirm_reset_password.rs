//! Reset-token redemption route, the target of emailed reset links.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use chirper_application::{ConfirmPasswordResetError, ConfirmPasswordResetUseCase};
use chirper_core::{CredentialStore, EmailClient, Password, TokenStore, TokenValue};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfirmResetPasswordRequest {
    pub new_password: Secret<String>,
    pub repeat_new_password: Secret<String>,
}

#[tracing::instrument(name = "Confirm password reset", skip(state, token, request))]
pub async fn confirm_reset_password<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    Path(token): Path<String>,
    Json(request): Json<ConfirmResetPasswordRequest>,
) -> Result<impl IntoResponse, ConfirmResetApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let new_password = Password::try_from(request.new_password)
        .map_err(|e| ConfirmResetApiError::Validation(e.to_string()))?;
    let repeat_new_password = Password::try_from(request.repeat_new_password)
        .map_err(|e| ConfirmResetApiError::Validation(e.to_string()))?;

    let use_case = ConfirmPasswordResetUseCase::new(
        state.credential_store.clone(),
        state.token_store.clone(),
    );
    use_case
        .execute(TokenValue::from(token), new_password, repeat_new_password)
        .await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Password changed successfully!"
    })))
}

#[derive(Debug, Error)]
pub enum ConfirmResetApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Token not found")]
    NotFound,

    #[error("Password reset failed: {0}")]
    Failed(String),
}

impl From<ConfirmPasswordResetError> for ConfirmResetApiError {
    fn from(error: ConfirmPasswordResetError) -> Self {
        match error {
            ConfirmPasswordResetError::PasswordMismatch => ConfirmResetApiError::PasswordMismatch,
            ConfirmPasswordResetError::TokenInvalid
            | ConfirmPasswordResetError::AccountNotFound => ConfirmResetApiError::NotFound,
            other => ConfirmResetApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for ConfirmResetApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ConfirmResetApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ConfirmResetApiError::PasswordMismatch => {
                (StatusCode::BAD_REQUEST, "Passwords do not match".to_string())
            }
            ConfirmResetApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ConfirmResetApiError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
