//! Account balance query.

use std::sync::Arc;

use super::{QueryDriver, QueryState, QueryStatus};
use crate::client::MirrorClient;
use crate::context::{HieroContext, use_hiero};
use crate::domain::{AccountInfo, MirrorError, UsageError};

/// Tracks the HBAR balance of one account.
#[derive(Debug)]
pub struct AccountQuery {
    client: MirrorClient,
    account_id: String,
    driver: QueryDriver<f64>,
}

impl AccountQuery {
    /// Create the query and, unless `account_id` is empty, start fetching.
    ///
    /// Must be called within a Tokio runtime.
    #[must_use]
    pub fn new(ctx: &HieroContext, account_id: impl Into<String>) -> Self {
        let mut query = Self {
            client: ctx.client(),
            account_id: account_id.into(),
            driver: QueryDriver::new("account", ctx.stale_policy()),
        };
        query.fetch();
        query
    }

    /// Create the query from the provider scope entered on this thread.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::OutsideProvider` when no provider is entered.
    pub fn from_scope(account_id: impl Into<String>) -> Result<Self, UsageError> {
        let ctx = use_hiero()?;
        Ok(Self::new(&ctx, account_id))
    }

    /// Change the account; refetches only if it differs.
    ///
    /// Clearing the id returns the query to `Idle` and cancels any pending
    /// response.
    pub fn set_account_id(&mut self, account_id: impl Into<String>) {
        let account_id = account_id.into();
        if account_id != self.account_id {
            self.account_id = account_id;
            self.fetch();
        }
    }

    fn fetch(&mut self) {
        if self.account_id.is_empty() {
            self.driver.reset();
            return;
        }
        let client = self.client.clone();
        let account_id = self.account_id.clone();
        self.driver.spawn(async move { client.get_account_balance(&account_id).await });
    }

    /// Apply completed requests; returns `true` if state changed.
    pub fn process_messages(&mut self) -> bool {
        self.driver.process_messages()
    }

    /// Wait for every in-flight request to complete.
    pub async fn settle(&mut self) {
        self.driver.settle().await;
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Balance in HBAR.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.driver.state().data
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.driver.state().loading()
    }

    #[must_use]
    pub fn status(&self) -> QueryStatus {
        self.driver.state().status
    }

    #[must_use]
    pub fn error(&self) -> Option<&Arc<MirrorError>> {
        self.driver.state().error.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &QueryState<f64> {
        self.driver.state()
    }

    /// Snapshot for display.
    #[must_use]
    pub fn info(&self) -> AccountInfo {
        let state = self.driver.state();
        AccountInfo {
            account_id: self.account_id.clone(),
            balance: state.data,
            loading: state.loading(),
            error: state.error.clone(),
        }
    }
}
