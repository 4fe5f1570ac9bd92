use chirper_core::{
    AuthenticatedAccount, CredentialStore, CredentialStoreError, Password, Username,
};

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Account is not active")]
    AccountInactive,
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
}

/// Credential check producing the `AuthenticatedAccount` capability the
/// other authenticated operations take as input.
pub struct LoginUseCase<C>
where
    C: CredentialStore,
{
    credential_store: C,
}

impl<C> LoginUseCase<C>
where
    C: CredentialStore,
{
    pub fn new(credential_store: C) -> Self {
        Self { credential_store }
    }

    /// An unknown username and a wrong password collapse into one
    /// `InvalidCredentials` answer. Inactive accounts are reported as
    /// such: the account exists but its email is not yet proven.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all, fields(username = %username))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<AuthenticatedAccount, LoginError> {
        self.credential_store
            .verify_password(&username, &password)
            .await
            .map_err(|error| match error {
                CredentialStoreError::AccountNotFound
                | CredentialStoreError::IncorrectPassword => LoginError::InvalidCredentials,
                CredentialStoreError::AccountInactive => LoginError::AccountInactive,
                other => LoginError::CredentialStore(other),
            })
    }
}
