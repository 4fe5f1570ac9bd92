//! Registration-token redemption route, the target of emailed
//! validation links.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;

use chirper_application::{ValidateAccountError, ValidateAccountUseCase};
use chirper_core::{CredentialStore, EmailClient, TokenStore, TokenValue};

use crate::state::AppState;

#[tracing::instrument(name = "Validate account", skip(state, token))]
pub async fn validate_account<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ValidateApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let use_case =
        ValidateAccountUseCase::new(state.credential_store.clone(), state.token_store.clone());
    use_case.execute(TokenValue::from(token)).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Account validated"
    })))
}

#[derive(Debug, Error)]
pub enum ValidateApiError {
    #[error("Token not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Failed(String),
}

impl From<ValidateAccountError> for ValidateApiError {
    fn from(error: ValidateAccountError) -> Self {
        match error {
            // an unknown token and a token for a vanished account are
            // both a plain 404 to the outside
            ValidateAccountError::TokenInvalid | ValidateAccountError::AccountNotFound => {
                ValidateApiError::NotFound
            }
            other => ValidateApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for ValidateApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ValidateApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ValidateApiError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
