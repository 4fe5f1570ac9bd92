//! Cookie-based session tokens for the authenticated operations.
//!
//! Login mints a short-lived JWT carried in an HttpOnly cookie; routes
//! that need "the logged-in user" turn that cookie back into a username
//! and pass an explicit identity into the use case.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use chirper_core::Username;

#[derive(Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
    /// Mark the cookie `Secure`. Off only for plain-http local runs.
    pub secure_cookies: bool,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Missing session cookie")]
    MissingToken,
    #[error("Invalid session token")]
    InvalidToken,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
}

/// Create a cookie carrying a fresh session token for the username.
pub fn generate_session_cookie(
    username: &Username,
    config: &SessionConfig,
) -> Result<Cookie<'static>, SessionError> {
    let token = generate_session_token(username, config)?;
    Ok(build_session_cookie(config, token))
}

/// Cookie that instructs the browser to drop the session.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = build_session_cookie(config, String::new());
    cookie.make_removal();
    cookie
}

fn build_session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .build()
}

fn generate_session_token(
    username: &Username,
    config: &SessionConfig,
) -> Result<String, SessionError> {
    let delta = chrono::Duration::try_seconds(config.ttl_seconds).ok_or(
        SessionError::UnexpectedError("Failed to create session duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();
    let exp: usize = exp
        .try_into()
        .map_err(|_| SessionError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = SessionClaims {
        sub: username.as_str().to_string(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.expose_secret().as_bytes()),
    )
    .map_err(|_| SessionError::InvalidToken)
}

/// Pull the session cookie out of the jar and decode it back into the
/// username it was issued for.
pub fn authenticated_username(
    jar: &CookieJar,
    config: &SessionConfig,
) -> Result<Username, SessionError> {
    let cookie = jar
        .get(&config.cookie_name)
        .ok_or(SessionError::MissingToken)?;

    let claims = decode::<SessionClaims>(
        cookie.value(),
        &DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| SessionError::InvalidToken)?;

    Username::try_from(claims.sub).map_err(|_| SessionError::InvalidToken)
}
