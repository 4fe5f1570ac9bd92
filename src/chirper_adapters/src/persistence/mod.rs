pub mod in_memory_credential_store;
pub mod in_memory_token_store;
pub mod password_hash;
pub mod postgres_credential_store;
pub mod postgres_token_store;

pub use in_memory_credential_store::InMemoryCredentialStore;
pub use in_memory_token_store::InMemoryTokenStore;
pub use postgres_credential_store::PostgresCredentialStore;
pub use postgres_token_store::PostgresTokenStore;
