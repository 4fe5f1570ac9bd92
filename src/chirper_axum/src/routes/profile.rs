//! Profile edit route for the logged-in account.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use chirper_application::{UpdateProfileError, UpdateProfileUseCase};
use chirper_core::{CredentialStore, EmailClient, PersonName, Profile, TokenStore};

use crate::extract::{AuthRejection, require_account};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

#[tracing::instrument(name = "Update profile", skip_all)]
pub async fn update_profile<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    jar: CookieJar,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, UpdateProfileApiError>
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let account = require_account(&jar, &state.session, &state.credential_store).await?;

    let profile = Profile {
        first_name: PersonName::try_from(request.first_name)
            .map_err(|e| UpdateProfileApiError::Validation(e.to_string()))?,
        last_name: PersonName::try_from(request.last_name)
            .map_err(|e| UpdateProfileApiError::Validation(e.to_string()))?,
        birth_date: request.birth_date,
        avatar: request.avatar,
    };

    let use_case = UpdateProfileUseCase::new(state.credential_store.clone());
    use_case.execute(account, profile).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Profile updated successfully!"
    })))
}

#[derive(Debug, Error)]
pub enum UpdateProfileApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Profile update failed: {0}")]
    Failed(String),
}

impl From<AuthRejection> for UpdateProfileApiError {
    fn from(_: AuthRejection) -> Self {
        UpdateProfileApiError::Unauthorized
    }
}

impl From<UpdateProfileError> for UpdateProfileApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::AccountNotFound => UpdateProfileApiError::AccountNotFound,
            other => UpdateProfileApiError::Failed(other.to_string()),
        }
    }
}

impl IntoResponse for UpdateProfileApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            UpdateProfileApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            UpdateProfileApiError::Validation(_) => StatusCode::BAD_REQUEST,
            UpdateProfileApiError::AccountNotFound => StatusCode::NOT_FOUND,
            UpdateProfileApiError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
