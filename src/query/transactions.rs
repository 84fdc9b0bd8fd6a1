//! Transaction history query.

use std::sync::Arc;

use super::{QueryDriver, QueryState};
use crate::client::{DEFAULT_TRANSACTION_LIMIT, MirrorClient};
use crate::context::{HieroContext, use_hiero};
use crate::domain::{MirrorError, Transaction, UsageError};

/// Tracks the most recent transactions of one account.
///
/// Refetches when the account or limit changes, and on [`Self::refetch`].
#[derive(Debug)]
pub struct TransactionsQuery {
    client: MirrorClient,
    account_id: String,
    limit: u32,
    driver: QueryDriver<Vec<Transaction>>,
}

impl TransactionsQuery {
    /// Create the query with the default limit of
    /// [`DEFAULT_TRANSACTION_LIMIT`] transactions.
    #[must_use]
    pub fn new(ctx: &HieroContext, account_id: impl Into<String>) -> Self {
        Self::with_limit(ctx, account_id, DEFAULT_TRANSACTION_LIMIT)
    }

    /// Create the query fetching at most `limit` transactions.
    #[must_use]
    pub fn with_limit(ctx: &HieroContext, account_id: impl Into<String>, limit: u32) -> Self {
        let mut query = Self {
            client: ctx.client(),
            account_id: account_id.into(),
            limit,
            driver: QueryDriver::new("transactions", ctx.stale_policy()),
        };
        query.fetch();
        query
    }

    /// Create the query from the provider scope entered on this thread.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::OutsideProvider` when no provider is entered.
    pub fn from_scope(account_id: impl Into<String>, limit: u32) -> Result<Self, UsageError> {
        let ctx = use_hiero()?;
        Ok(Self::with_limit(&ctx, account_id, limit))
    }

    pub fn set_account_id(&mut self, account_id: impl Into<String>) {
        let account_id = account_id.into();
        if account_id != self.account_id {
            self.account_id = account_id;
            self.fetch();
        }
    }

    pub fn set_limit(&mut self, limit: u32) {
        if limit != self.limit {
            self.limit = limit;
            self.fetch();
        }
    }

    /// Repeat the request for the current account and limit.
    ///
    /// Does nothing while the account id is empty.
    pub fn refetch(&mut self) {
        self.fetch();
    }

    fn fetch(&mut self) {
        if self.account_id.is_empty() {
            self.driver.reset();
            return;
        }
        let client = self.client.clone();
        let account_id = self.account_id.clone();
        let limit = self.limit;
        self.driver.spawn(async move { client.get_transactions(&account_id, limit).await });
    }

    pub fn process_messages(&mut self) -> bool {
        self.driver.process_messages()
    }

    pub async fn settle(&mut self) {
        self.driver.settle().await;
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.driver.state().data
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.driver.state().loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Arc<MirrorError>> {
        self.driver.state().error.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &QueryState<Vec<Transaction>> {
        self.driver.state()
    }
}
