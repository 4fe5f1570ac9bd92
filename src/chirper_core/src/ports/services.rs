use async_trait::async_trait;

use crate::domain::email::Email;

/// Outbound mail. Fire-and-forget from the core's point of view: a
/// failure is surfaced to the caller of the lifecycle operation,
/// retries (if any) belong to the implementation.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

#[async_trait]
impl<C: EmailClient + ?Sized> EmailClient for std::sync::Arc<C> {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        (**self).send_email(recipient, subject, content).await
    }
}
