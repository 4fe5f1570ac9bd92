use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("username regex is valid"));

const MAX_USERNAME_LENGTH: usize = 150;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
    #[error("Username must be at most {MAX_USERNAME_LENGTH} characters long")]
    TooLong,
    #[error("Username may only contain letters, digits and underscores")]
    InvalidCharacters,
}

/// A unique handle. Immutable after account creation.
///
/// Usernames are url path segments (`/{username}` shows a user's feed),
/// so the accepted alphabet is word characters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(UsernameError::Empty);
        }
        if value.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UsernameError::TooLong);
        }
        if !USERNAME_REGEX.is_match(&value) {
            return Err(UsernameError::InvalidCharacters);
        }
        Ok(Self(value))
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
