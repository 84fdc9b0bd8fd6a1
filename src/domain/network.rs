//! Network selection for Hedera mirror nodes.
//!
//! This module defines the supported networks and the public mirror node
//! host each one defaults to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Network
// ============================================================================

/// Hedera network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::enum_variant_names)]
pub enum Network {
    /// The production network.
    MainNet,
    /// The public test network.
    #[default]
    TestNet,
    /// The preview network, which runs upcoming releases.
    PreviewNet,
}

impl Network {
    /// All supported networks, in display order.
    pub const ALL: [Self; 3] = [Self::MainNet, Self::TestNet, Self::PreviewNet];

    /// Returns the lowercase network name used in hostnames and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MainNet => "mainnet",
            Self::TestNet => "testnet",
            Self::PreviewNet => "previewnet",
        }
    }

    /// Returns the public mirror node base URL for this network.
    ///
    /// # Returns
    ///
    /// `https://{network}.mirrornode.hedera.com` with no trailing slash.
    #[must_use]
    pub fn mirror_node_url(&self) -> String {
        format!("https://{}.mirrornode.hedera.com", self.as_str())
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network '{0}', expected one of mainnet, testnet, previewnet")]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNetworkError(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
