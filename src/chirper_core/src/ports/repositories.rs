use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AuthenticatedAccount, NewAccount, Profile},
    email::Email,
    password::Password,
    token::{TokenPurpose, TokenValue, VerificationToken},
    username::Username,
};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Account is not active")]
    AccountInactive,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UsernameTaken, Self::UsernameTaken) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::AccountInactive, Self::AccountInactive) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Identity records: create, look up, and mutate accounts.
///
/// Password hashing lives behind this trait; callers hand over
/// plaintext `Password` values and the store persists only a hash.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stores a new account, deactivated and unvalidated. Fails with
    /// `UsernameTaken` if the username exists, active or not.
    async fn add_account(&self, account: NewAccount) -> Result<(), CredentialStoreError>;

    async fn find_by_username(&self, username: &Username) -> Result<Account, CredentialStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Account, CredentialStoreError>;

    /// Sets `is_active` and `email_validated` in a single update.
    async fn activate(&self, email: &Email) -> Result<(), CredentialStoreError>;

    async fn set_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), CredentialStoreError>;

    /// Checks credentials. Inactive accounts fail with
    /// `AccountInactive` even when the password matches.
    async fn verify_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthenticatedAccount, CredentialStoreError>;

    /// Replaces the profile fields. The username is immutable, so it is
    /// the lookup key and never part of the update.
    async fn update_profile(
        &self,
        username: &Username,
        profile: Profile,
    ) -> Result<(), CredentialStoreError>;
}

#[async_trait]
impl<S: CredentialStore + ?Sized> CredentialStore for std::sync::Arc<S> {
    async fn add_account(&self, account: NewAccount) -> Result<(), CredentialStoreError> {
        (**self).add_account(account).await
    }

    async fn find_by_username(&self, username: &Username) -> Result<Account, CredentialStoreError> {
        (**self).find_by_username(username).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, CredentialStoreError> {
        (**self).find_by_email(email).await
    }

    async fn activate(&self, email: &Email) -> Result<(), CredentialStoreError> {
        (**self).activate(email).await
    }

    async fn set_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        (**self).set_password(email, new_password).await
    }

    async fn verify_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthenticatedAccount, CredentialStoreError> {
        (**self).verify_password(username, password).await
    }

    async fn update_profile(
        &self,
        username: &Username,
        profile: Profile,
    ) -> Result<(), CredentialStoreError> {
        (**self).update_profile(username, profile).await
    }
}

// TokenStore port trait and errors
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token not found")]
    TokenInvalid,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for TokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::TokenInvalid, Self::TokenInvalid) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Single-use verification tokens.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Mints and persists a fresh token for the email. Multiple live
    /// tokens per email are allowed.
    async fn issue(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<VerificationToken, TokenStoreError>;

    /// Consumes the token and returns the email it was bound to.
    ///
    /// Lookup and invalidation are one atomic step: of two concurrent
    /// redemptions of the same value, exactly one succeeds and the
    /// other sees `TokenInvalid`. A wrong-purpose match also fails with
    /// `TokenInvalid` and leaves the token live.
    async fn redeem(
        &self,
        value: &TokenValue,
        purpose: TokenPurpose,
    ) -> Result<Email, TokenStoreError>;

    /// Number of live tokens bound to the email for the purpose.
    async fn live_token_count(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<usize, TokenStoreError>;
}

#[async_trait]
impl<S: TokenStore + ?Sized> TokenStore for std::sync::Arc<S> {
    async fn issue(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<VerificationToken, TokenStoreError> {
        (**self).issue(email, purpose).await
    }

    async fn redeem(
        &self,
        value: &TokenValue,
        purpose: TokenPurpose,
    ) -> Result<Email, TokenStoreError> {
        (**self).redeem(value, purpose).await
    }

    async fn live_token_count(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<usize, TokenStoreError> {
        (**self).live_token_count(email, purpose).await
    }
}
