//! Hand-rolled port doubles for use-case unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chirper_core::{
    Account, AuthenticatedAccount, CredentialStore, CredentialStoreError, Email, EmailClient,
    NewAccount, Password, PersonName, Profile, TokenPurpose, TokenStore, TokenStoreError,
    TokenValue, Username, VerificationToken,
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

pub struct StoredAccount {
    pub account: Account,
    pub password: Password,
}

#[derive(Clone, Default)]
pub struct MockCredentialStore {
    pub accounts: Arc<RwLock<HashMap<Username, StoredAccount>>>,
}

impl MockCredentialStore {
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn stored_password(&self, username: &Username) -> Password {
        self.accounts.read().await[username].password.clone()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn add_account(&self, account: NewAccount) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.username) {
            return Err(CredentialStoreError::UsernameTaken);
        }
        let stored = StoredAccount {
            account: Account {
                username: account.username.clone(),
                email: account.email,
                is_active: false,
                email_validated: false,
                profile: account.profile,
            },
            password: account.password,
        };
        accounts.insert(account.username, stored);
        Ok(())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Account, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(username)
            .map(|stored| stored.account.clone())
            .ok_or(CredentialStoreError::AccountNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|stored| stored.account.email == *email)
            .map(|stored| stored.account.clone())
            .ok_or(CredentialStoreError::AccountNotFound)
    }

    async fn activate(&self, email: &Email) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .values_mut()
            .find(|stored| stored.account.email == *email)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        stored.account.is_active = true;
        stored.account.email_validated = true;
        Ok(())
    }

    async fn set_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .values_mut()
            .find(|stored| stored.account.email == *email)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        stored.password = new_password;
        Ok(())
    }

    async fn verify_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthenticatedAccount, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        let stored = accounts
            .get(username)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        if stored.password != *password {
            return Err(CredentialStoreError::IncorrectPassword);
        }
        if !stored.account.is_active {
            return Err(CredentialStoreError::AccountInactive);
        }
        Ok(AuthenticatedAccount {
            username: stored.account.username.clone(),
            email: stored.account.email.clone(),
        })
    }

    async fn update_profile(
        &self,
        username: &Username,
        profile: Profile,
    ) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(username)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        stored.account.profile = profile;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockTokenStore {
    pub tokens: Arc<RwLock<HashMap<TokenValue, VerificationToken>>>,
}

impl MockTokenStore {
    pub async fn only_token_for(&self, email: &Email) -> VerificationToken {
        let tokens = self.tokens.read().await;
        let mut matching = tokens.values().filter(|token| token.email == *email);
        let token = matching.next().expect("no token for email").clone();
        assert!(matching.next().is_none(), "more than one token for email");
        token
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn issue(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<VerificationToken, TokenStoreError> {
        let token = VerificationToken::issue_now(email.clone(), purpose);
        self.tokens
            .write()
            .await
            .insert(token.value.clone(), token.clone());
        Ok(token)
    }

    async fn redeem(
        &self,
        value: &TokenValue,
        purpose: TokenPurpose,
    ) -> Result<Email, TokenStoreError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get(value) {
            Some(token) if token.purpose == purpose => {
                let token = tokens.remove(value).expect("checked above");
                Ok(token.email)
            }
            _ => Err(TokenStoreError::TokenInvalid),
        }
    }

    async fn live_token_count(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<usize, TokenStoreError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|token| token.email == *email && token.purpose == purpose)
            .count())
    }
}

pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    pub sent: Arc<RwLock<Vec<SentEmail>>>,
    pub fail_next: Arc<AtomicBool>,
}

impl RecordingEmailClient {
    pub fn failing() -> Self {
        let client = Self::default();
        client.fail_next.store(true, Ordering::SeqCst);
        client
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err("delivery refused".to_string());
        }
        self.sent.write().await.push(SentEmail {
            to: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            body: content.to_string(),
        });
        Ok(())
    }
}

pub fn username(value: &str) -> Username {
    Username::try_from(value.to_string()).unwrap()
}

pub fn email(value: &str) -> Email {
    Email::try_from(value.to_string()).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(value.to_string()).unwrap()
}

pub fn new_account(name: &str, address: &str, pass: &str) -> NewAccount {
    NewAccount {
        username: username(name),
        email: email(address),
        password: password(pass),
        profile: Profile {
            first_name: PersonName::try_from("Sergey".to_string()).unwrap(),
            last_name: PersonName::try_from("Brin".to_string()).unwrap(),
            birth_date: None,
            avatar: None,
        },
    }
}
