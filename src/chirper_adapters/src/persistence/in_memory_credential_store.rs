use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use chirper_core::{
    Account, AuthenticatedAccount, CredentialStore, CredentialStoreError, Email, NewAccount,
    Password, Profile, Username,
};

struct AccountRecord {
    account: Account,
    password: Password,
}

/// Credential store backed by a process-local map. Used by the test
/// suite and by the binary when no database is configured; passwords
/// are compared in plaintext, nothing leaves the process.
#[derive(Default, Clone)]
pub struct InMemoryCredentialStore {
    accounts: Arc<RwLock<HashMap<Username, AccountRecord>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn add_account(&self, account: NewAccount) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.username) {
            return Err(CredentialStoreError::UsernameTaken);
        }
        let record = AccountRecord {
            account: Account {
                username: account.username.clone(),
                email: account.email,
                is_active: false,
                email_validated: false,
                profile: account.profile,
            },
            password: account.password,
        };
        accounts.insert(account.username, record);
        Ok(())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Account, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(username)
            .map(|record| record.account.clone())
            .ok_or(CredentialStoreError::AccountNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        // deterministic pick when historical accounts share an email
        accounts
            .values()
            .filter(|record| record.account.email == *email)
            .min_by(|a, b| a.account.username.as_str().cmp(b.account.username.as_str()))
            .map(|record| record.account.clone())
            .ok_or(CredentialStoreError::AccountNotFound)
    }

    async fn activate(&self, email: &Email) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts
            .values_mut()
            .find(|record| record.account.email == *email)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        record.account.is_active = true;
        record.account.email_validated = true;
        Ok(())
    }

    async fn set_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts
            .values_mut()
            .find(|record| record.account.email == *email)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        record.password = new_password;
        Ok(())
    }

    async fn verify_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthenticatedAccount, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        let record = accounts
            .get(username)
            .ok_or(CredentialStoreError::AccountNotFound)?;

        if record.password != *password {
            return Err(CredentialStoreError::IncorrectPassword);
        }
        if !record.account.is_active {
            return Err(CredentialStoreError::AccountInactive);
        }

        Ok(AuthenticatedAccount {
            username: record.account.username.clone(),
            email: record.account.email.clone(),
        })
    }

    async fn update_profile(
        &self,
        username: &Username,
        profile: Profile,
    ) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts
            .get_mut(username)
            .ok_or(CredentialStoreError::AccountNotFound)?;
        record.account.profile = profile;
        Ok(())
    }
}
