use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

/// Service configuration, layered: baked-in defaults, then an optional
/// JSON file (`CHIRPER_CONFIG`, default `config.json`), then
/// `CHIRPER__`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub email: EmailSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    /// Bind address, e.g. `0.0.0.0:3000`.
    pub address: String,
    /// Scheme + host used in emailed deep links.
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// When absent the service runs on in-memory stores.
    pub url: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub base_url: String,
    pub sender: String,
    /// When absent outbound mail is recorded in-process instead of
    /// hitting Postmark.
    pub authorization_token: Option<Secret<String>>,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
    /// Mark the session cookie `Secure`. Turn off only for plain-http
    /// local runs.
    pub secure_cookies: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = std::env::var(constants::env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| "config.json".to_string());

        let mut builder = Config::builder()
            .set_default("application.address", constants::prod::APP_ADDRESS)?
            .set_default("application.base_url", "http://localhost:3000")?
            .set_default("database.url", None::<String>)?
            .set_default("email.base_url", constants::prod::email_client::BASE_URL)?
            .set_default("email.sender", constants::prod::email_client::SENDER)?
            .set_default("email.authorization_token", None::<String>)?
            .set_default(
                "email.timeout_ms",
                constants::prod::email_client::TIMEOUT.as_millis() as u64,
            )?
            .set_default("session.cookie_name", "chirper_session")?
            // override in any real deployment
            .set_default("session.secret", "chirper-dev-secret")?
            .set_default("session.ttl_seconds", 3600)?
            .set_default("session.secure_cookies", true)?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(Environment::with_prefix("CHIRPER").separator("__"));

        // the sqlx-conventional DATABASE_URL wins over everything else
        if let Ok(url) = std::env::var(constants::env::DATABASE_URL_ENV_VAR) {
            builder = builder.set_override("database.url", url)?;
        }

        builder.build()?.try_deserialize()
    }
}
