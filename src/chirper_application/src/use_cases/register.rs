use chirper_core::{
    CredentialStore, CredentialStoreError, EmailClient, NewAccount, TokenPurpose, TokenStore,
    TokenStoreError,
};

use crate::notifications::{self, LifecycleLinks};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Could not send validation email: {0}")]
    EmailDelivery(String),
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
    #[error("Token store error: {0}")]
    TokenStore(#[from] TokenStoreError),
}

impl From<CredentialStoreError> for RegisterError {
    fn from(error: CredentialStoreError) -> Self {
        match error {
            CredentialStoreError::UsernameTaken => RegisterError::UsernameTaken,
            other => RegisterError::CredentialStore(other),
        }
    }
}

/// Registration: create a deactivated account, mint a verification
/// token for its email and mail out the validation link.
pub struct RegisterUseCase<C, T, E>
where
    C: CredentialStore,
    T: TokenStore,
    E: EmailClient,
{
    credential_store: C,
    token_store: T,
    email_client: E,
    links: LifecycleLinks,
}

impl<C, T, E> RegisterUseCase<C, T, E>
where
    C: CredentialStore,
    T: TokenStore,
    E: EmailClient,
{
    pub fn new(credential_store: C, token_store: T, email_client: E, links: LifecycleLinks) -> Self {
        Self {
            credential_store,
            token_store,
            email_client,
            links,
        }
    }

    /// Execute the registration use case.
    ///
    /// The duplicate-username check happens inside `add_account`, so a
    /// taken username fails before any token exists. A mail delivery
    /// failure is surfaced to the caller; the account and token remain
    /// (re-requesting a reset link is the recovery path).
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all, fields(username = %account.username))]
    pub async fn execute(&self, account: NewAccount) -> Result<(), RegisterError> {
        let email = account.email.clone();

        self.credential_store.add_account(account).await?;

        let token = self
            .token_store
            .issue(&email, TokenPurpose::RegistrationVerify)
            .await?;

        let message = notifications::registration_email(&self.links, &token.value);
        self.email_client
            .send_email(&email, &message.subject, &message.body)
            .await
            .map_err(RegisterError::EmailDelivery)?;

        Ok(())
    }
}
