use std::sync::Arc;

use dashmap::DashMap;

use chirper_core::{
    Email, TokenPurpose, TokenStore, TokenStoreError, TokenValue, VerificationToken,
};

/// Token store backed by a concurrent map.
///
/// `DashMap::remove_if` is the whole point: lookup, purpose check and
/// invalidation happen under one shard lock, so two concurrent
/// redemptions of the same value get exactly one winner.
#[derive(Default, Clone)]
pub struct InMemoryTokenStore {
    tokens: Arc<DashMap<TokenValue, VerificationToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn issue(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<VerificationToken, TokenStoreError> {
        let token = VerificationToken::issue_now(email.clone(), purpose);
        self.tokens.insert(token.value.clone(), token.clone());
        Ok(token)
    }

    async fn redeem(
        &self,
        value: &TokenValue,
        purpose: TokenPurpose,
    ) -> Result<Email, TokenStoreError> {
        self.tokens
            .remove_if(value, |_, token| token.purpose == purpose)
            .map(|(_, token)| token.email)
            .ok_or(TokenStoreError::TokenInvalid)
    }

    async fn live_token_count(
        &self,
        email: &Email,
        purpose: TokenPurpose,
    ) -> Result<usize, TokenStoreError> {
        Ok(self
            .tokens
            .iter()
            .filter(|token| token.email == *email && token.purpose == purpose)
            .count())
    }
}
