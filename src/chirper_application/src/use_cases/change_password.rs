use chirper_core::{AuthenticatedAccount, CredentialStore, CredentialStoreError, Password};

#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Old password is incorrect")]
    OldPasswordIncorrect,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("New password must differ from the old one")]
    PasswordUnchanged,
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
}

/// Authenticated password change, no token involved. The caller proves
/// who they are by passing an `AuthenticatedAccount` (produced by
/// login), not by ambient session state.
pub struct ChangePasswordUseCase<C>
where
    C: CredentialStore,
{
    credential_store: C,
}

impl<C> ChangePasswordUseCase<C>
where
    C: CredentialStore,
{
    pub fn new(credential_store: C) -> Self {
        Self { credential_store }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all, fields(username = %account.username))]
    pub async fn execute(
        &self,
        account: AuthenticatedAccount,
        old_password: Password,
        new_password: Password,
        repeat_new_password: Password,
    ) -> Result<(), ChangePasswordError> {
        self.credential_store
            .verify_password(&account.username, &old_password)
            .await
            .map_err(|error| match error {
                CredentialStoreError::IncorrectPassword => ChangePasswordError::OldPasswordIncorrect,
                other => ChangePasswordError::CredentialStore(other),
            })?;

        if new_password != repeat_new_password {
            return Err(ChangePasswordError::PasswordMismatch);
        }
        if new_password == old_password {
            return Err(ChangePasswordError::PasswordUnchanged);
        }

        self.credential_store
            .set_password(&account.email, new_password)
            .await
            .map_err(ChangePasswordError::CredentialStore)
    }
}
