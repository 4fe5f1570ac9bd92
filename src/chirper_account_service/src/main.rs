use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;

use chirper_account_service::AccountService;
use chirper_account_service::telemetry::init_tracing;
use chirper_adapters::{
    InMemoryCredentialStore, InMemoryTokenStore, MockEmailClient, PostgresCredentialStore,
    PostgresTokenStore, PostmarkEmailClient, SessionConfig, Settings,
};
use chirper_application::LifecycleLinks;
use chirper_core::{CredentialStore, Email, EmailClient, TokenStore};
use chirper_axum::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let settings = Settings::load()?;

    let (credential_store, token_store): (
        Arc<dyn CredentialStore>,
        Arc<dyn TokenStore>,
    ) = match &settings.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(url.expose_secret())
                .await?;
            sqlx::migrate!().run(&pg_pool).await?;
            (
                Arc::new(PostgresCredentialStore::new(pg_pool.clone())),
                Arc::new(PostgresTokenStore::new(pg_pool)),
            )
        }
        None => {
            tracing::warn!("No database configured, running on in-memory stores");
            (
                Arc::new(InMemoryCredentialStore::default()),
                Arc::new(InMemoryTokenStore::default()),
            )
        }
    };

    let email_client: Arc<dyn EmailClient> = match &settings.email.authorization_token {
        Some(token) => {
            let sender = Email::try_from(Secret::new(settings.email.sender.clone()))
                .map_err(|e| eyre!("Invalid sender address: {e}"))?;
            let http_client = HttpClient::builder()
                .timeout(Duration::from_millis(settings.email.timeout_ms))
                .build()?;
            Arc::new(PostmarkEmailClient::new(
                settings.email.base_url.clone(),
                sender,
                token.clone(),
                http_client,
            ))
        }
        None => {
            tracing::warn!("No email token configured, outbound mail is recorded in-process");
            Arc::new(MockEmailClient::default())
        }
    };

    let state = AppState::new(
        credential_store,
        token_store,
        email_client,
        LifecycleLinks::new(settings.application.base_url.clone()),
        SessionConfig {
            cookie_name: settings.session.cookie_name.clone(),
            secret: settings.session.secret.clone(),
            ttl_seconds: settings.session.ttl_seconds,
            secure_cookies: settings.session.secure_cookies,
        },
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    AccountService::new(state).run(listener).await?;

    Ok(())
}
