//! # Chirper - Account Lifecycle Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account
//! service components. Use this crate to get access to the whole account
//! lifecycle in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! chirper = { path = "../chirper" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Username`, `Account`, etc.
//! - **Repository traits**: `CredentialStore`, `TokenStore`
//! - **Use cases**: `RegisterUseCase`, `ValidateAccountUseCase`, etc.
//! - **Adapters**: `PostgresCredentialStore`, `InMemoryTokenStore`, `PostmarkEmailClient`, etc.
//! - **Service**: `AccountService` - The main entry point for the account service

/// Core domain types and value objects
pub mod core {
    pub use chirper_core::*;
}

pub use chirper_core::{
    Account, AuthenticatedAccount, Email, EmailError, NewAccount, Password, PasswordError,
    PersonName, Profile, TokenPurpose, TokenValue, Username, VerificationToken,
};

/// Repository and service trait definitions
pub mod ports {
    pub use chirper_core::{
        CredentialStore, CredentialStoreError, EmailClient, TokenStore, TokenStoreError,
    };
}

pub use chirper_core::{
    CredentialStore, CredentialStoreError, EmailClient, TokenStore, TokenStoreError,
};

/// Application use cases
pub mod use_cases {
    pub use chirper_application::*;
}

pub use chirper_application::{
    ChangePasswordUseCase, ConfirmPasswordResetUseCase, LifecycleLinks, LoginUseCase,
    RegisterUseCase, RequestPasswordResetUseCase, UpdateProfileUseCase, ValidateAccountUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    pub use chirper_adapters::*;
}

pub use chirper_adapters::{
    InMemoryCredentialStore, InMemoryTokenStore, MockEmailClient, PostgresCredentialStore,
    PostgresTokenStore, PostmarkEmailClient, SessionConfig, Settings,
};

/// The assembled HTTP service
pub use chirper_account_service::AccountService;

/// Re-export async-trait for implementing the repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export the web stack so embedders can mount the service router
/// without pinning their own versions
pub use axum;
pub use tokio;
