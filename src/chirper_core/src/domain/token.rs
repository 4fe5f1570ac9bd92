use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::email::Email;

/// What a verification token is allowed to authorize.
///
/// Redemption checks the purpose together with the value; a reset link
/// can never activate an account and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    RegistrationVerify,
    PasswordReset,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::RegistrationVerify => "registration_verify",
            TokenPurpose::PasswordReset => "password_reset",
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque single-use token value.
///
/// Generated values are uuid-v4 in simple form: 32 lowercase hex
/// characters, 122 bits of entropy. Values arriving from a url path are
/// carried as-is and matched byte-for-byte at redemption.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenValue(String);

impl TokenValue {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A live token: value bound to an email address and a purpose.
///
/// Tokens reference an email rather than an account id; at registration
/// time the account already exists but is looked up by email only when
/// the token comes back.
#[derive(Debug, Clone)]
pub struct VerificationToken {
    pub value: TokenValue,
    pub email: Email,
    pub purpose: TokenPurpose,
    pub issued_at: DateTime<Utc>,
}

impl VerificationToken {
    pub fn issue_now(email: Email, purpose: TokenPurpose) -> Self {
        Self {
            value: TokenValue::generate(),
            email,
            purpose,
            issued_at: Utc::now(),
        }
    }
}
