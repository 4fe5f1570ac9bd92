//! Authenticated password change route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use chirper_application::{ChangePasswordError, ChangePasswordUseCase};
use chirper_core::{CredentialStore, EmailClient, Password, TokenStore};

use crate::extract::{AuthRejection, require_account};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
    pub repeat_new_password: Secret<String>,
}

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    jar: CookieJar,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ChangePasswordApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let account = require_account(&jar, &state.session, &state.credential_store).await?;

    let old_password = Password::try_from(request.old_password)
        .map_err(|e| ChangePasswordApiError::Validation(e.to_string()))?;
    let new_password = Password::try_from(request.new_password)
        .map_err(|e| ChangePasswordApiError::Validation(e.to_string()))?;
    let repeat_new_password = Password::try_from(request.repeat_new_password)
        .map_err(|e| ChangePasswordApiError::Validation(e.to_string()))?;

    let use_case = ChangePasswordUseCase::new(state.credential_store.clone());
    use_case
        .execute(account, old_password, new_password, repeat_new_password)
        .await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Password changed successfully!"
    })))
}

#[derive(Debug, Error)]
pub enum ChangePasswordApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Old password is incorrect")]
    OldPasswordIncorrect,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("New password must differ from the old one")]
    PasswordUnchanged,

    #[error("Password change failed: {0}")]
    Failed(String),
}

impl From<AuthRejection> for ChangePasswordApiError {
    fn from(_: AuthRejection) -> Self {
        ChangePasswordApiError::Unauthorized
    }
}

impl From<ChangePasswordError> for ChangePasswordApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::OldPasswordIncorrect => {
                ChangePasswordApiError::OldPasswordIncorrect
            }
            ChangePasswordError::PasswordMismatch => ChangePasswordApiError::PasswordMismatch,
            ChangePasswordError::PasswordUnchanged => ChangePasswordApiError::PasswordUnchanged,
            other => ChangePasswordApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for ChangePasswordApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ChangePasswordApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ChangePasswordApiError::Validation(_)
            | ChangePasswordApiError::OldPasswordIncorrect
            | ChangePasswordApiError::PasswordMismatch
            | ChangePasswordApiError::PasswordUnchanged => StatusCode::BAD_REQUEST,
            ChangePasswordApiError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
