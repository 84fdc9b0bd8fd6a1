//! Account balance endpoint.

use serde::Deserialize;

use super::MirrorClient;
use crate::domain::{MirrorError, tinybars_to_hbar};

/// `GET /api/v1/accounts/{id}`, only the fields we read.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    balance: BalanceResponse,
}

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    /// Balance in tinybars.
    balance: i64,
}

impl MirrorClient {
    /// Get an account's HBAR balance.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError::Http` for non-2xx responses and
    /// `MirrorError::Parse` if `balance.balance` is missing.
    pub async fn get_account_balance(&self, account_id: &str) -> Result<f64, MirrorError> {
        let path = format!("/api/v1/accounts/{account_id}");
        let account: AccountResponse = self.get_json("account", &path).await?;

        Ok(tinybars_to_hbar(account.balance.balance))
    }
}
