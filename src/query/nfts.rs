//! NFT holdings query.

use std::sync::Arc;

use super::{QueryDriver, QueryState};
use crate::client::MirrorClient;
use crate::context::{HieroContext, use_hiero};
use crate::domain::{MirrorError, Nft, UsageError};

/// Tracks the NFTs held by one account.
///
/// Metadata that is not valid base64 fails the whole fetch; the previous
/// list is kept alongside the decode error.
#[derive(Debug)]
pub struct NftsQuery {
    client: MirrorClient,
    account_id: String,
    driver: QueryDriver<Vec<Nft>>,
}

impl NftsQuery {
    /// Create the query and, unless `account_id` is empty, start fetching.
    #[must_use]
    pub fn new(ctx: &HieroContext, account_id: impl Into<String>) -> Self {
        let mut query = Self {
            client: ctx.client(),
            account_id: account_id.into(),
            driver: QueryDriver::new("NFTs", ctx.stale_policy()),
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
        self.driver.spawn(async move { client.get_nfts(&account_id).await });
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
    pub fn nfts(&self) -> &[Nft] {
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
    pub fn state(&self) -> &QueryState<Vec<Nft>> {
        self.driver.state()
    }
}
