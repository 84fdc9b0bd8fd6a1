//! Transaction types for the mirror node.
//!
//! Transactions are flattened to the fields a history view needs: identity,
//! type, result, consensus time and the HBAR transfer line items.

use chrono::{DateTime, Utc};

/// Result string the mirror node reports for successful transactions.
pub const SUCCESS_RESULT: &str = "SUCCESS";

// ============================================================================
// Timestamp Formatting
// ============================================================================

/// Parses a mirror node consensus timestamp (`"seconds.nanoseconds"`).
///
/// # Returns
///
/// `None` if the string is not a valid timestamp.
#[must_use]
pub fn parse_consensus_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match timestamp.split_once('.') {
        Some((secs, nanos)) => (secs, nanos),
        None => (timestamp, "0"),
    };

    let secs = secs.parse::<i64>().ok()?;
    if nanos.is_empty() || nanos.len() > 9 || !nanos.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Right-pad so "5" means 500_000_000 ns, not 5 ns.
    let nanos = format!("{nanos:0<9}").parse::<u32>().ok()?;

    DateTime::from_timestamp(secs, nanos)
}

/// Formats a consensus timestamp for display.
#[must_use]
pub fn format_consensus_timestamp(timestamp: &str) -> String {
    match parse_consensus_timestamp(timestamp) {
        Some(datetime) => datetime.format("%a, %d %b %Y %H:%M:%S").to_string(),
        None => "Timestamp not available".to_string(),
    }
}

// ============================================================================
// Transfer
// ============================================================================

/// A single HBAR movement within a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    /// The account credited or debited.
    pub account: String,
    /// Amount in HBAR; negative for debits.
    pub amount: f64,
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction involving the queried account.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The transaction identifier (e.g., "0.0.1234-1700000000-000000000").
    pub transaction_id: String,
    /// Transaction type as named by the mirror node (e.g., "CRYPTOTRANSFER").
    pub tx_type: String,
    /// Consensus result (e.g., "SUCCESS").
    pub result: String,
    /// Consensus timestamp in `seconds.nanoseconds` form.
    pub consensus_timestamp: String,
    /// HBAR transfers in upstream order.
    pub transfers: Vec<Transfer>,
}

impl Transaction {
    /// Returns `true` if the transaction reached consensus successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == SUCCESS_RESULT
    }

    /// Returns the consensus timestamp as a UTC datetime.
    #[must_use]
    pub fn consensus_time(&self) -> Option<DateTime<Utc>> {
        parse_consensus_timestamp(&self.consensus_timestamp)
    }

    /// Returns the net HBAR change for `account` across all transfers.
    #[must_use]
    pub fn net_amount_for(&self, account: &str) -> f64 {
        self.transfers
            .iter()
            .filter(|t| t.account == account)
            .map(|t| t.amount)
            .sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
