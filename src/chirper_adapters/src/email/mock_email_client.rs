use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use secrecy::ExposeSecret;
use tokio::sync::RwLock;

use chirper_core::{Email, EmailClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Email client that records instead of sending, so tests can assert
/// on exactly what would have gone out.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<SentEmail>>>,
    fail_next: Arc<AtomicBool>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `send_email` call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    pub async fn last_sent(&self) -> Option<SentEmail> {
        self.sent.read().await.last().cloned()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err("mock delivery failure".to_string());
        }
        self.sent.write().await.push(SentEmail {
            to: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            body: content.to_string(),
        });
        Ok(())
    }
}
