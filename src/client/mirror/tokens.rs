//! Fungible token balances endpoint.

use serde::Deserialize;

use super::MirrorClient;
use crate::domain::{MirrorError, Token, UNKNOWN_SYMBOL};

#[derive(Debug, Deserialize)]
struct TokensResponse {
    tokens: Vec<TokenRecord>,
}

#[derive(Debug, Deserialize)]
struct TokenRecord {
    token_id: String,
    #[serde(default)]
    symbol: Option<String>,
    balance: u64,
    #[serde(default)]
    decimals: Option<u32>,
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        Self {
            token_id: record.token_id,
            symbol: record
                .symbol
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
            balance: record.balance,
            decimals: record.decimals.unwrap_or(0),
        }
    }
}

impl MirrorClient {
    /// Get the fungible token balances held by an account.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError::Http` for non-2xx responses and
    /// `MirrorError::Parse` for records missing `token_id` or `balance`.
    pub async fn get_tokens(&self, account_id: &str) -> Result<Vec<Token>, MirrorError> {
        let path = format!("/api/v1/accounts/{account_id}/tokens");
        let response: TokensResponse = self.get_json("tokens", &path).await?;

        Ok(response.tokens.into_iter().map(Token::from).collect())
    }
}
