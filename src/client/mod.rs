//! HTTP clients for the mirror node REST API.
//!
//! - [`http`] - the [`Fetch`] capability and its `reqwest` implementation
//! - [`mirror`] - typed endpoint calls built on top of it

pub mod http;
pub mod mirror;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{DEFAULT_TIMEOUT_SECS, Fetch, FetchResponse, HttpClient, HttpConfig};
pub use mirror::{DEFAULT_TRANSACTION_LIMIT, MirrorClient};
