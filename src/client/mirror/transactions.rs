//! Transaction history endpoint.

use serde::Deserialize;

use super::MirrorClient;
use crate::domain::{MirrorError, Transaction, Transfer, tinybars_to_hbar};

/// Number of transactions requested when the caller does not choose.
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    transaction_id: String,
    name: String,
    result: String,
    consensus_timestamp: String,
    #[serde(default)]
    transfers: Option<Vec<TransferRecord>>,
}

#[derive(Debug, Deserialize)]
struct TransferRecord {
    account: String,
    /// Amount in tinybars.
    amount: i64,
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        let transfers = record
            .transfers
            .unwrap_or_default()
            .into_iter()
            .map(|t| Transfer {
                account: t.account,
                amount: tinybars_to_hbar(t.amount),
            })
            .collect();

        Self {
            transaction_id: record.transaction_id,
            tx_type: record.name,
            result: record.result,
            consensus_timestamp: record.consensus_timestamp,
            transfers,
        }
    }
}

impl MirrorClient {
    /// Get the most recent transactions involving an account.
    ///
    /// Only the first page is fetched.
    ///
    /// # Errors
    ///
    /// Returns `MirrorError::Http` for non-2xx responses and
    /// `MirrorError::Parse` for malformed records.
    pub async fn get_transactions(
        &self,
        account_id: &str,
        limit: u32,
    ) -> Result<Vec<Transaction>, MirrorError> {
        let path = format!("/api/v1/transactions?account.id={account_id}&limit={limit}");
        let response: TransactionsResponse = self.get_json("transactions", &path).await?;

        Ok(response
            .transactions
            .into_iter()
            .map(Transaction::from)
            .collect())
    }
}
