//! Password-reset request route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use chirper_application::{RequestPasswordResetError, RequestPasswordResetUseCase};
use chirper_core::{CredentialStore, Email, EmailClient, TokenStore};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: Secret<String>,
}

/// Always answers success for a well-formed email, whether or not an
/// account matches, so the endpoint cannot enumerate addresses.
#[tracing::instrument(name = "Request password reset", skip_all)]
pub async fn request_password_reset<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ResetPasswordApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let email = Email::try_from(request.email)
        .map_err(|e| ResetPasswordApiError::Validation(e.to_string()))?;

    let use_case = RequestPasswordResetUseCase::new(
        state.credential_store.clone(),
        state.token_store.clone(),
        state.email_client.clone(),
        state.links.clone(),
    );
    use_case
        .execute(email)
        .await
        .map_err(|e: RequestPasswordResetError| ResetPasswordApiError::Failed(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Email sent!"
    })))
}

#[derive(Debug, Error)]
pub enum ResetPasswordApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Password reset request failed: {0}")]
    Failed(String),
}

impl IntoResponse for ResetPasswordApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ResetPasswordApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ResetPasswordApiError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
