use chirper_core::{
    CredentialStore, CredentialStoreError, TokenPurpose, TokenStore, TokenStoreError, TokenValue,
};

#[derive(Debug, thiserror::Error)]
pub enum ValidateAccountError {
    #[error("Token not found")]
    TokenInvalid,
    #[error("No account matches the token's email")]
    AccountNotFound,
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
    #[error("Token store error: {0}")]
    TokenStore(TokenStoreError),
}

/// Registration-token redemption: consume the token, then activate and
/// mark validated the account behind its email.
pub struct ValidateAccountUseCase<C, T>
where
    C: CredentialStore,
    T: TokenStore,
{
    credential_store: C,
    token_store: T,
}

impl<C, T> ValidateAccountUseCase<C, T>
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

    /// Execute the validation use case.
    ///
    /// Redemption is the token store's atomic consume; under two
    /// concurrent requests for the same value only one gets past this
    /// point. A token whose email no longer matches any account fails
    /// with `AccountNotFound` (and stays consumed).
    #[tracing::instrument(name = "ValidateAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, token: TokenValue) -> Result<(), ValidateAccountError> {
        let email = self
            .token_store
            .redeem(&token, TokenPurpose::RegistrationVerify)
            .await
            .map_err(|error| match error {
                TokenStoreError::TokenInvalid => ValidateAccountError::TokenInvalid,
                other => ValidateAccountError::TokenStore(other),
            })?;

        self.credential_store
            .activate(&email)
            .await
            .map_err(|error| match error {
                CredentialStoreError::AccountNotFound => ValidateAccountError::AccountNotFound,
                other => ValidateAccountError::CredentialStore(other),
            })
    }
}
