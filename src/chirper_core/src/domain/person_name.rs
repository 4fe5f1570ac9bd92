use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PersonNameError {
    #[error("This field must contain only letters.")]
    NotAlphabetic,
}

/// First or last name. Letters only, stored title-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = PersonNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || !value.chars().all(char::is_alphabetic) {
            return Err(PersonNameError::NotAlphabetic);
        }
        Ok(Self(title_case(&value)))
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
