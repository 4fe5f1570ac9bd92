//! Session-to-identity bridging for the authenticated routes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;

use chirper_adapters::SessionConfig;
use chirper_adapters::auth::session::authenticated_username;
use chirper_core::{AuthenticatedAccount, CredentialStore};

/// Returned when a route requires a logged-in account and the session
/// cookie is missing, expired or points at a vanished account.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "Authentication required" })),
        )
            .into_response()
    }
}

/// Resolve the session cookie into an explicit identity value for the
/// use-case layer. Any failure collapses into a generic 401.
pub async fn require_account<C>(
    jar: &CookieJar,
    session: &SessionConfig,
    credential_store: &C,
) -> Result<AuthenticatedAccount, AuthRejection>
where
    C: CredentialStore,
{
    let username = authenticated_username(jar, session).map_err(|_| AuthRejection)?;
    let account = credential_store
        .find_by_username(&username)
        .await
        .map_err(|_| AuthRejection)?;
    Ok(AuthenticatedAccount {
        username: account.username,
        email: account.email,
    })
}
