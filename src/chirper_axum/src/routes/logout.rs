//! Logout route: clears the session cookie.

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;

use chirper_adapters::auth::session::removal_cookie;
use chirper_core::{CredentialStore, EmailClient, TokenStore};

use crate::state::AppState;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<C, T, E>(
    State(state): State<AppState<C, T, E>>,
    jar: CookieJar,
) -> (CookieJar, impl IntoResponse)
where
    C: CredentialStore + Clone + 'static,
    T: TokenStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    (
        jar.add(removal_cookie(&state.session)),
        Json(serde_json::json!({ "status": "success" })),
    )
}
