//! Deep-link construction and the fixed outbound mail templates.
//!
//! The url paths here must match the redemption routes byte-for-byte,
//! otherwise emailed links dead-end.

use chirper_core::TokenValue;

/// Builds the absolute urls embedded in lifecycle emails.
#[derive(Debug, Clone)]
pub struct LifecycleLinks {
    base_url: String,
}

impl LifecycleLinks {
    /// `base_url` is scheme + host, e.g. `http://twitter.com`. A
    /// trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn validation_url(&self, token: &TokenValue) -> String {
        format!("{}/users/validate/{}", self.base_url, token)
    }

    pub fn reset_confirmation_url(&self, token: &TokenValue) -> String {
        format!("{}/users/confirm-reset-password/{}", self.base_url, token)
    }
}

/// Subject and plain-text body of one outbound mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

pub fn registration_email(links: &LifecycleLinks, token: &TokenValue) -> EmailMessage {
    EmailMessage {
        subject: "Validate your account.".to_string(),
        body: format!(
            "Thanks for registering. To complete the process, please click in the link below: {}",
            links.validation_url(token)
        ),
    }
}

pub fn password_reset_email(links: &LifecycleLinks, token: &TokenValue) -> EmailMessage {
    EmailMessage {
        subject: "Password recovery.".to_string(),
        body: format!(
            "To reset your password, please click in the link below: {}",
            links.reset_confirmation_url(token)
        ),
    }
}
