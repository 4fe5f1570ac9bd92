use chirper_core::{
    CredentialStore, CredentialStoreError, Email, EmailClient, TokenPurpose, TokenStore,
    TokenStoreError,
};

use crate::notifications::{self, LifecycleLinks};

#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Could not send reset email: {0}")]
    EmailDelivery(String),
    #[error("Credential store error: {0}")]
    CredentialStore(CredentialStoreError),
    #[error("Token store error: {0}")]
    TokenStore(#[from] TokenStoreError),
}

/// Password-reset request: mint a reset token and mail the confirmation
/// link, but only when an account actually matches the email.
///
/// An unknown email is reported as success so the endpoint cannot be
/// used to enumerate registered addresses.
pub struct RequestPasswordResetUseCase<C, T, E>
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

impl<C, T, E> RequestPasswordResetUseCase<C, T, E>
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

    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<(), RequestPasswordResetError> {
        match self.credential_store.find_by_email(&email).await {
            Ok(_) => {}
            Err(CredentialStoreError::AccountNotFound) => {
                tracing::debug!("reset requested for unknown email, reporting success");
                return Ok(());
            }
            Err(other) => return Err(RequestPasswordResetError::CredentialStore(other)),
        }

        let token = self
            .token_store
            .issue(&email, TokenPurpose::PasswordReset)
            .await?;

        let message = notifications::password_reset_email(&self.links, &token.value);
        self.email_client
            .send_email(&email, &message.subject, &message.body)
            .await
            .map_err(RequestPasswordResetError::EmailDelivery)?;

        Ok(())
    }
}
