//! Error types for mirror node operations.
//!
//! Two families live here: [`MirrorError`] covers everything that can go wrong
//! while a query talks to the mirror node and is stored in query state, while
//! [`UsageError`] reports programmer mistakes and is returned immediately.

use thiserror::Error;

// ============================================================================
// Mirror Errors
// ============================================================================

/// Errors produced while fetching or decoding mirror node data.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The mirror node answered with a non-2xx status.
    #[error("Failed to fetch {resource}: {status_text}")]
    Http {
        /// What was being fetched (e.g., "account", "tokens").
        resource: &'static str,
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase for the status (e.g., "Not Found").
        status_text: String,
    },

    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected schema.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// NFT metadata was not valid base64.
    #[error("Decode error: metadata of {token_id} #{serial_number} is not valid base64")]
    Decode {
        /// Token the NFT belongs to.
        token_id: String,
        /// Serial number of the NFT.
        serial_number: u64,
    },

    /// The request task ended without producing a result (e.g., it panicked).
    #[error("Request task failed: {message}")]
    Task {
        /// Description of how the task ended.
        message: String,
    },
}

impl MirrorError {
    /// Create a new HTTP status error.
    ///
    /// # Arguments
    ///
    /// * `resource` - What was being fetched
    /// * `status` - The HTTP status code returned
    /// * `status_text` - The reason phrase for the status
    #[must_use]
    pub fn http(resource: &'static str, status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            resource,
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new metadata decode error.
    #[must_use]
    pub fn decode(token_id: impl Into<String>, serial_number: u64) -> Self {
        Self::Decode {
            token_id: token_id.into(),
            serial_number,
        }
    }

    /// Create a new task failure error.
    #[must_use]
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MirrorError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Usage Errors
// ============================================================================

/// Errors caused by using the API incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A context-dependent call was made with no provider in scope.
    #[error("use_hiero must be used within a HieroProvider")]
    OutsideProvider,
}

// ============================================================================
// Tests
// ============================================================================
