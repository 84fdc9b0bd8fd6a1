//! Mirror node REST client.
//!
//! `MirrorClient` issues one GET per call and maps the JSON response onto the
//! domain types. Each endpoint lives in its own submodule together with the
//! serde schema it expects.
//!
//! # Example
//!
//! ```ignore
//! use hiero_mirror::client::MirrorClient;
//!
//! let client = MirrorClient::with_http("https://testnet.mirrornode.hedera.com");
//! let balance = client.get_account_balance("0.0.1234").await?;
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::http::{Fetch, HttpClient};
use crate::domain::MirrorError;

mod accounts;
mod nfts;
mod tokens;
mod transactions;


pub use transactions::DEFAULT_TRANSACTION_LIMIT;

// ============================================================================
// Mirror Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct MirrorClient {
    /// Base URL, without the `/api/v1` prefix.
    base_url: String,
    /// Transport used for every request.
    fetcher: Arc<dyn Fetch>,
}

impl MirrorClient {
    /// Creates a client for `base_url` using the given fetch capability.
    #[must_use]
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    /// Creates a client backed by the default `reqwest` client.
    #[must_use]
    pub fn with_http(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(HttpClient::new()))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}` and decode the 2xx body as `T`.
    ///
    /// `resource` names what is being fetched in HTTP error messages.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<T, MirrorError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, resource, "fetching from mirror node");

        let response = self.fetcher.fetch(&url).await?;

        if !response.is_success() {
            return Err(MirrorError::http(
                resource,
                response.status,
                response.status_text,
            ));
        }

        response.json()
    }
}
