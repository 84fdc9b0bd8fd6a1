//! Reactive data-access layer for the Hiero/Hedera mirror node REST API.
//!
//! The crate exposes four queries (account balance, token balances, NFT
//! holdings and transaction history), each of which performs one HTTP GET
//! per input change and keeps loading/error/data state for a UI to render.
//! A [`HieroProvider`] holds the shared configuration (network and mirror
//! node URL) the queries read.
//!
//! # Example
//!
//! ```ignore
//! use hiero_mirror::{AccountQuery, HieroProvider, Network, TransactionsQuery};
//!
//! let provider = HieroProvider::new(Network::TestNet);
//! let ctx = provider.context();
//!
//! let mut account = AccountQuery::new(ctx, "0.0.1234");
//! let mut history = TransactionsQuery::new(ctx, "0.0.1234");
//!
//! // In a UI tick:
//! account.process_messages();
//! history.process_messages();
//! if !account.loading() {
//!     println!("{} HBAR", account.balance());
//! }
//! ```
//!
//! Queries spawn their requests on the ambient Tokio runtime and log through
//! `tracing`; installing a subscriber is left to the application.

pub mod client;
pub mod context;
pub mod domain;
pub mod query;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Fetch, FetchResponse, HttpClient, HttpConfig, MirrorClient};
pub use context::{
    HieroConfig, HieroContext, HieroProvider, HieroProviderBuilder, ProviderGuard, use_hiero,
};
pub use domain::{
    AccountInfo, MirrorError, Network, Nft, Token, Transaction, Transfer, UsageError,
};
pub use query::{
    AccountQuery, NftsQuery, QueryState, QueryStatus, StalePolicy, TokensQuery,
    TransactionsQuery,
};
