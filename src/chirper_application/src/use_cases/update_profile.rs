use chirper_core::{AuthenticatedAccount, CredentialStore, CredentialStoreError, Profile};

#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
}

/// Profile edit for the logged-in account. The username is the lookup
/// key and cannot be changed through this path.
pub struct UpdateProfileUseCase<C>
where
    C: CredentialStore,
{
    credential_store: C,
}

impl<C> UpdateProfileUseCase<C>
where
    C: CredentialStore,
{
    pub fn new(credential_store: C) -> Self {
        Self { credential_store }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip_all, fields(username = %account.username))]
    pub async fn execute(
        &self,
        account: AuthenticatedAccount,
        profile: Profile,
    ) -> Result<(), UpdateProfileError> {
        self.credential_store
            .update_profile(&account.username, profile)
            .await
            .map_err(|error| match error {
                CredentialStoreError::AccountNotFound => UpdateProfileError::AccountNotFound,
                other => UpdateProfileError::CredentialStore(other),
            })
    }
}
