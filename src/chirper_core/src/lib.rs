pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AuthenticatedAccount, NewAccount, Profile},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    person_name::{PersonName, PersonNameError},
    token::{TokenPurpose, TokenValue, VerificationToken},
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{CredentialStore, CredentialStoreError, TokenStore, TokenStoreError},
    services::EmailClient,
};
