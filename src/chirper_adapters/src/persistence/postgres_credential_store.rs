use chrono::NaiveDate;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row};

use chirper_core::{
    Account, AuthenticatedAccount, CredentialStore, CredentialStoreError, Email, NewAccount,
    Password, PersonName, Profile, Username,
};

use super::password_hash::{compute_password_hash, verify_password_hash};

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    username: String,
    email: String,
    is_active: bool,
    email_validated: bool,
    first_name: String,
    last_name: String,
    birth_date: Option<NaiveDate>,
    avatar: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, CredentialStoreError> {
        Ok(Account {
            username: Username::try_from(self.username)
                .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?,
            email: Email::try_from(self.email)
                .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?,
            is_active: self.is_active,
            email_validated: self.email_validated,
            profile: Profile {
                first_name: PersonName::try_from(self.first_name)
                    .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?,
                last_name: PersonName::try_from(self.last_name)
                    .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?,
                birth_date: self.birth_date,
                avatar: self.avatar,
            },
        })
    }
}

const ACCOUNT_COLUMNS: &str =
    "username, email, is_active, email_validated, first_name, last_name, birth_date, avatar";

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<(), CredentialStoreError> {
        let password_hash = compute_password_hash(account.password)
            .await
            .map_err(CredentialStoreError::Unexpected)?;

        sqlx::query(
            r#"
                INSERT INTO accounts
                    (username, email, password_hash, is_active, email_validated,
                     first_name, last_name, birth_date, avatar)
                VALUES ($1, $2, $3, FALSE, FALSE, $4, $5, $6, $7)
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.email.as_ref().expose_secret())
        .bind(password_hash.expose_secret())
        .bind(account.profile.first_name.as_str())
        .bind(account.profile.last_name.as_str())
        .bind(account.profile.birth_date)
        .bind(account.profile.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return CredentialStoreError::UsernameTaken;
                }
            }
            CredentialStoreError::Unexpected(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving account by username", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<Account, CredentialStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        row.ok_or(CredentialStoreError::AccountNotFound)?.into_account()
    }

    #[tracing::instrument(name = "Retrieving account by email", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, CredentialStoreError> {
        // deterministic pick when historical accounts share an email
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1 ORDER BY username LIMIT 1"
        ))
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        row.ok_or(CredentialStoreError::AccountNotFound)?.into_account()
    }

    #[tracing::instrument(name = "Activating account", skip_all)]
    async fn activate(&self, email: &Email) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET is_active = TRUE, email_validated = TRUE
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CredentialStoreError::AccountNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Setting new password", skip_all)]
    async fn set_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(CredentialStoreError::Unexpected)?;

        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET password_hash = $1
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CredentialStoreError::AccountNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Validating credentials", skip_all)]
    async fn verify_password(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthenticatedAccount, CredentialStoreError> {
        let row = sqlx::query(
            r#"
                SELECT email, password_hash, is_active
                FROM accounts
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::AccountNotFound);
        };

        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
        verify_password_hash(Secret::from(password_hash), password.clone())
            .await
            .map_err(|_| CredentialStoreError::IncorrectPassword)?;

        let is_active: bool = row
            .try_get("is_active")
            .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
        if !is_active {
            return Err(CredentialStoreError::AccountInactive);
        }

        let email: String = row
            .try_get("email")
            .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
        Ok(AuthenticatedAccount {
            username: username.clone(),
            email: Email::try_from(email)
                .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?,
        })
    }

    #[tracing::instrument(name = "Updating profile", skip_all)]
    async fn update_profile(
        &self,
        username: &Username,
        profile: Profile,
    ) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET first_name = $1, last_name = $2, birth_date = $3, avatar = $4
                WHERE username = $5
            "#,
        )
        .bind(profile.first_name.as_str())
        .bind(profile.last_name.as_str())
        .bind(profile.birth_date)
        .bind(profile.avatar)
        .bind(username.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CredentialStoreError::AccountNotFound);
        }
        Ok(())
    }
}
