//! Account types for the mirror node.

use std::sync::Arc;

use super::error::MirrorError;

// ============================================================================
// Account Info
// ============================================================================

/// Snapshot of an account balance query.
///
/// `balance` is only meaningful when `loading` is `false` and `error` is
/// `None`; after a failure it keeps the last successfully fetched value.
#[derive(Debug, Clone, Default)]
pub struct AccountInfo {
    /// The account identifier (e.g., "0.0.1234").
    pub account_id: String,
    /// Balance in HBAR.
    pub balance: f64,
    /// Whether a request for this account is in flight.
    pub loading: bool,
    /// The error from the most recent request, if it failed.
    pub error: Option<Arc<MirrorError>>,
}

impl AccountInfo {
    /// Returns `true` once a balance has been fetched without error.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
