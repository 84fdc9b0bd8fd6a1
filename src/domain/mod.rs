//! Domain types for mirror node data.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for mirror node operations
//! - [`network`] - Network selection (mainnet, testnet, previewnet)
//! - [`amount`] - Tinybar/HBAR conversion
//! - [`account`] - Account balance snapshot
//! - [`token`] - Fungible token holdings
//! - [`nft`] - NFT holdings
//! - [`transaction`] - Transactions and transfers

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod amount;
pub mod error;
pub mod network;
pub mod nft;
pub mod token;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use account::AccountInfo;
pub use amount::{TINYBARS_PER_HBAR, tinybars_to_hbar};
pub use error::{MirrorError, UsageError};
pub use network::{Network, ParseNetworkError};
pub use nft::Nft;
pub use token::{Token, UNKNOWN_SYMBOL};
pub use transaction::{
    SUCCESS_RESULT, Transaction, Transfer, format_consensus_timestamp, parse_consensus_timestamp,
};
