use chirper_core::{
    CredentialStore, CredentialStoreError, Password, TokenPurpose, TokenStore, TokenStoreError,
    TokenValue,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfirmPasswordResetError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Token not found")]
    TokenInvalid,
    #[error("No account matches the token's email")]
    AccountNotFound,
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
    #[error("Token store error: {0}")]
    TokenStore(TokenStoreError),
}

/// Reset-token redemption: consume the token and set the new password
/// on the account behind its email.
pub struct ConfirmPasswordResetUseCase<C, T>
where
    C: CredentialStore,
    T: TokenStore,
{
    credential_store: C,
    token_store: T,
}

impl<C, T> ConfirmPasswordResetUseCase<C, T>
where
    C: CredentialStore,
    T: TokenStore,
{
    pub fn new(credential_store: C, token_store: T) -> Self {
        Self {
            credential_store,
            token_store,
        }
    }

    /// Execute the reset confirmation.
    ///
    /// The new/repeated comparison runs before the token is touched; a
    /// mismatch leaves the token live so the user can resubmit the same
    /// link with matching fields.
    #[tracing::instrument(name = "ConfirmPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: TokenValue,
        new_password: Password,
        repeat_new_password: Password,
    ) -> Result<(), ConfirmPasswordResetError> {
        if new_password != repeat_new_password {
            return Err(ConfirmPasswordResetError::PasswordMismatch);
        }

        let email = self
            .token_store
            .redeem(&token, TokenPurpose::PasswordReset)
            .await
            .map_err(|error| match error {
                TokenStoreError::TokenInvalid => ConfirmPasswordResetError::TokenInvalid,
                other => ConfirmPasswordResetError::TokenStore(other),
            })?;

        self.credential_store
            .set_password(&email, new_password)
            .await
            .map_err(|error| match error {
                CredentialStoreError::AccountNotFound => ConfirmPasswordResetError::AccountNotFound,
                other => ConfirmPasswordResetError::CredentialStore(other),
            })
    }
}
