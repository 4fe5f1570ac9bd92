use secrecy::ExposeSecret;
use sqlx::PgPool;

use chirper_core::{
    Email, TokenPurpose, TokenStore, TokenStoreError, TokenValue, VerificationToken,
};

#[derive(Clone)]
pub struct PostgresTokenStore {
    pool: PgPool,
}

impl PostgresTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TokenStore for PostgresTokenStore {
    #[tracing::instrument(name = "Issuing verification token", skip_all, fields(purpose = %purpose))]
    async fn issue(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<VerificationToken, TokenStoreError> {
        let token = VerificationToken::issue_now(email.clone(), purpose);

        sqlx::query(
            r#"
                INSERT INTO validation_tokens (token, email, purpose, issued_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.value.as_str())
        .bind(token.email.as_ref().expose_secret())
        .bind(token.purpose.as_str())
        .bind(token.issued_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::Unexpected(e.to_string()))?;

        Ok(token)
    }

    /// The conditional `DELETE .. RETURNING` is the atomicity story:
    /// the row is gone in the same statement that proves it existed, so
    /// a second redemption finds nothing.
    #[tracing::instrument(name = "Redeeming verification token", skip_all, fields(purpose = %purpose))]
    async fn redeem(
        &self,
        value: &TokenValue,
        purpose: TokenPurpose,
    ) -> Result<Email, TokenStoreError> {
        let email = sqlx::query_scalar::<_, String>(
            r#"
                DELETE FROM validation_tokens
                WHERE token = $1 AND purpose = $2
                RETURNING email
            "#,
        )
        .bind(value.as_str())
        .bind(purpose.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenStoreError::Unexpected(e.to_string()))?;

        let email = email.ok_or(TokenStoreError::TokenInvalid)?;
        Email::try_from(email).map_err(|e| TokenStoreError::Unexpected(e.to_string()))
    }

    #[tracing::instrument(name = "Counting live tokens", skip_all, fields(purpose = %purpose))]
    async fn live_token_count(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<usize, TokenStoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM validation_tokens
                WHERE email = $1 AND purpose = $2
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .bind(purpose.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TokenStoreError::Unexpected(e.to_string()))?;

        Ok(count as usize)
    }
}