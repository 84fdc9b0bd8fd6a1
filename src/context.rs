//! Shared mirror node configuration and the scope that provides it.
//!
//! A [`HieroProvider`] builds one immutable [`HieroContext`] (network,
//! mirror node URL, fetch capability). Queries receive the context either
//! explicitly, by reference, or through [`use_hiero`] while the provider's
//! scope is entered on the current thread.
//!
//! # Example
//!
//! ```ignore
//! use hiero_mirror::{HieroProvider, Network, AccountQuery, use_hiero};
//!
//! let provider = HieroProvider::new(Network::TestNet);
//!
//! // Explicit injection
//! let query = AccountQuery::new(provider.context(), "0.0.1234");
//!
//! // Scoped lookup
//! let _guard = provider.enter();
//! let ctx = use_hiero()?;
//! ```

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::{Fetch, HttpClient, HttpConfig, MirrorClient};
use crate::domain::{Network, UsageError};
use crate::query::StalePolicy;

// ============================================================================
// Configuration Input
// ============================================================================

/// Caller-supplied configuration, e.g. deserialized from an app's settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HieroConfig {
    /// The network to query.
    #[serde(default)]
    pub network: Network,
    /// Mirror node base URL; the network's public host when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror_node_url: Option<String>,
}

impl HieroConfig {
    /// Returns the mirror node URL after default resolution.
    #[must_use]
    pub fn resolved_mirror_node_url(&self) -> String {
        match self.mirror_node_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.network.mirror_node_url(),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Debug)]
struct ContextInner {
    network: Network,
    mirror_node_url: String,
    fetcher: Arc<dyn Fetch>,
    stale_policy: StalePolicy,
}

/// Immutable configuration shared by every query in a scope.
///
/// Cloning is cheap; all clones point at the same configuration.
#[derive(Debug, Clone)]
pub struct HieroContext {
    inner: Arc<ContextInner>,
}

impl HieroContext {
    /// The selected network.
    #[must_use]
    pub fn network(&self) -> Network {
        self.inner.network
    }

    /// The resolved mirror node base URL.
    #[must_use]
    pub fn mirror_node_url(&self) -> &str {
        &self.inner.mirror_node_url
    }

    /// How queries treat completions of superseded requests.
    #[must_use]
    pub fn stale_policy(&self) -> StalePolicy {
        self.inner.stale_policy
    }

    /// The fetch capability shared by this scope.
    #[must_use]
    pub fn fetcher(&self) -> Arc<dyn Fetch> {
        Arc::clone(&self.inner.fetcher)
    }

    /// A mirror node client bound to this context's URL and fetcher.
    #[must_use]
    pub fn client(&self) -> MirrorClient {
        MirrorClient::new(self.mirror_node_url(), self.fetcher())
    }

    /// Returns `true` if both handles point at the same configuration.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Provider
// ============================================================================

thread_local! {
    static SCOPES: RefCell<Vec<(u64, HieroContext)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Owns a [`HieroContext`] and makes it available to [`use_hiero`].
#[derive(Debug, Clone)]
pub struct HieroProvider {
    context: HieroContext,
}

impl HieroProvider {
    /// Create a provider for `network` using its public mirror node.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self::builder(network).build()
    }

    /// Create a provider from deserialized configuration.
    #[must_use]
    pub fn from_config(config: &HieroConfig) -> Self {
        let mut builder = Self::builder(config.network);
        if let Some(url) = &config.mirror_node_url {
            builder = builder.mirror_node_url(url.clone());
        }
        builder.build()
    }

    /// Start building a provider with non-default settings.
    #[must_use]
    pub fn builder(network: Network) -> HieroProviderBuilder {
        HieroProviderBuilder {
            network,
            mirror_node_url: None,
            fetcher: None,
            http_config: HttpConfig::default(),
            stale_policy: StalePolicy::default(),
        }
    }

    /// The context this provider supplies.
    #[must_use]
    pub fn context(&self) -> &HieroContext {
        &self.context
    }

    /// Enter this provider's scope on the current thread.
    ///
    /// The scope lasts until the returned guard is dropped. Nested scopes
    /// shadow outer ones.
    #[must_use = "the scope ends when the guard is dropped"]
    pub fn enter(&self) -> ProviderGuard {
        let id = NEXT_SCOPE_ID.replace(NEXT_SCOPE_ID.get() + 1);
        let depth = SCOPES.with_borrow_mut(|scopes| {
            scopes.push((id, self.context.clone()));
            scopes.len() - 1
        });
        tracing::debug!(
            network = %self.context.network(),
            url = self.context.mirror_node_url(),
            depth,
            "entered mirror node scope"
        );
        ProviderGuard {
            id,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with this provider's scope entered.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

/// Builder for [`HieroProvider`].
#[derive(Debug)]
pub struct HieroProviderBuilder {
    network: Network,
    mirror_node_url: Option<String>,
    fetcher: Option<Arc<dyn Fetch>>,
    http_config: HttpConfig,
    stale_policy: StalePolicy,
}

impl HieroProviderBuilder {
    /// Override the mirror node URL. An empty string keeps the default.
    #[must_use]
    pub fn mirror_node_url(mut self, url: impl Into<String>) -> Self {
        self.mirror_node_url = Some(url.into());
        self
    }

    /// Use a custom fetch capability instead of the `reqwest` client.
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Configure the default HTTP client. Ignored when a custom fetcher is set.
    #[must_use]
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Choose how queries handle overlapping requests.
    #[must_use]
    pub fn stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Build the provider.
    #[must_use]
    pub fn build(self) -> HieroProvider {
        let config = HieroConfig {
            network: self.network,
            mirror_node_url: self.mirror_node_url,
        };
        let fetcher: Arc<dyn Fetch> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpClient::with_config(self.http_config)),
        };

        HieroProvider {
            context: HieroContext {
                inner: Arc::new(ContextInner {
                    network: config.network,
                    mirror_node_url: config.resolved_mirror_node_url(),
                    fetcher,
                    stale_policy: self.stale_policy,
                }),
            },
        }
    }
}

/// Keeps a provider scope entered; leaving it on drop.
///
/// Guards may be dropped in any order. Dropping one removes only its own
/// scope, and the innermost scope still alive stays current.
#[derive(Debug)]
pub struct ProviderGuard {
    id: u64,
    // Scopes are per thread.
    _not_send: PhantomData<*const ()>,
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        SCOPES.with_borrow_mut(|scopes| {
            if let Some(pos) = scopes.iter().rposition(|(id, _)| *id == self.id) {
                scopes.remove(pos);
            }
        });
    }
}

// ============================================================================
// Accessor
// ============================================================================

/// Returns the context of the innermost entered provider.
///
/// # Errors
///
/// Returns `UsageError::OutsideProvider` when no provider scope is entered
/// on the current thread. This is a programming error, not a runtime
/// condition to retry.
pub fn use_hiero() -> Result<HieroContext, UsageError> {
    SCOPES
        .with_borrow(|scopes| scopes.last().map(|(_, ctx)| ctx.clone()))
        .ok_or(UsageError::OutsideProvider)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_context_inside_provider() {
        let provider = HieroProvider::new(Network::TestNet);
        let ctx = provider.scope(use_hiero).unwrap();

        assert_eq!(ctx.network(), Network::TestNet);
        assert_eq!(ctx.mirror_node_url(), "https://testnet.mirrornode.hedera.com");
        assert!(ctx.ptr_eq(provider.context()));
    }

    #[test]
    fn test_fails_outside_provider() {
        assert_eq!(use_hiero().unwrap_err(), UsageError::OutsideProvider);
    }

    #[test]
    fn test_scope_ends_with_guard() {
        let provider = HieroProvider::new(Network::MainNet);
        {
            let _guard = provider.enter();
            assert!(use_hiero().is_ok());
        }
        assert!(use_hiero().is_err());
    }

    #[test]
    fn test_custom_mirror_node_url() {
        let provider = HieroProvider::builder(Network::MainNet)
            .mirror_node_url("https://custom.mirror.com")
            .build();

        assert_eq!(provider.context().mirror_node_url(), "https://custom.mirror.com");
        assert_eq!(provider.context().network(), Network::MainNet);
    }

    #[test]
    fn test_empty_mirror_node_url_uses_default() {
        let provider = HieroProvider::builder(Network::PreviewNet)
            .mirror_node_url("")
            .build();

        assert_eq!(
            provider.context().mirror_node_url(),
            "https://previewnet.mirrornode.hedera.com"
        );
    }

    #[test]
    fn test_nested_scopes_shadow() {
        let outer = HieroProvider::new(Network::MainNet);
        let inner = HieroProvider::new(Network::PreviewNet);

        outer.scope(|| {
            inner.scope(|| {
                assert_eq!(use_hiero().unwrap().network(), Network::PreviewNet);
            });
            assert_eq!(use_hiero().unwrap().network(), Network::MainNet);
        });
    }

    #[test]
    fn test_out_of_order_guard_drop_keeps_inner_scope() {
        let outer = HieroProvider::new(Network::MainNet);
        let inner = HieroProvider::new(Network::PreviewNet);

        let outer_guard = outer.enter();
        let inner_guard = inner.enter();
        drop(outer_guard);

        let ctx = use_hiero().unwrap();
        assert!(ctx.ptr_eq(inner.context()));

        drop(inner_guard);
        assert_eq!(use_hiero().unwrap_err(), UsageError::OutsideProvider);
    }

    #[test]
    fn test_inner_guard_drop_restores_outer_scope() {
        let outer = HieroProvider::new(Network::MainNet);
        let inner = HieroProvider::new(Network::PreviewNet);

        let outer_guard = outer.enter();
        let inner_guard = inner.enter();
        drop(inner_guard);

        assert!(use_hiero().unwrap().ptr_eq(outer.context()));
        drop(outer_guard);
        assert!(use_hiero().is_err());
    }

    #[test]
    fn test_from_config() {
        let config: HieroConfig = serde_json::from_str(
            r#"{ "network": "previewnet", "mirror_node_url": "http://localhost:5551" }"#,
        )
        .unwrap();
        let provider = HieroProvider::from_config(&config);
        assert_eq!(provider.context().network(), Network::PreviewNet);
        assert_eq!(provider.context().mirror_node_url(), "http://localhost:5551");

        let defaults: HieroConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(
            defaults.resolved_mirror_node_url(),
            "https://testnet.mirrornode.hedera.com"
        );
    }

    #[test]
    fn test_stale_policy_propagates() {
        let provider = HieroProvider::builder(Network::TestNet)
            .stale_policy(StalePolicy::LastWriteWins)
            .build();
        assert_eq!(provider.context().stale_policy(), StalePolicy::LastWriteWins);
        assert_eq!(
            HieroProvider::new(Network::TestNet).context().stale_policy(),
            StalePolicy::DiscardStale
        );
    }
}
