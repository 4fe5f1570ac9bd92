pub mod auth;
pub mod config;
pub mod email;
pub mod persistence;

pub use auth::session::{SessionClaims, SessionConfig, SessionError};
pub use config::Settings;
pub use email::{MockEmailClient, PostmarkEmailClient};
pub use persistence::{
    InMemoryCredentialStore, InMemoryTokenStore, PostgresCredentialStore, PostgresTokenStore,
};
