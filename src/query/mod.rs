//! Reactive queries over the mirror node.
//!
//! Each query owns its input (account id, limit), the last fetched data and
//! a small state machine:
//!
//! ```text
//!            input set / refetch
//!   Idle ───────────────────────────► Loading
//!                                      │   ▲
//!                         completion   │   │ input change / refetch
//!                                      ▼   │
//!                               Success | Error
//! ```
//!
//! Input changes spawn a Tokio task that performs the request and posts a
//! completion back on the query's channel. Completions are applied when the
//! owner calls `process_messages()` (from a UI tick, say) or awaits
//! `settle()`. Failed requests keep the previous data and record the error.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::MirrorError;

mod account;
mod nfts;
mod tokens;
mod transactions;


pub use account::AccountQuery;
pub use nfts::NftsQuery;
pub use tokens::TokensQuery;
pub use transactions::TransactionsQuery;

// ============================================================================
// Policy and Status
// ============================================================================

/// What to do with a completion whose request has since been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Drop it; only the newest request may update state or clear loading.
    #[default]
    DiscardStale,
    /// Apply every completion in arrival order. A slow response for an old
    /// input can overwrite newer data.
    LastWriteWins,
}

/// Where a query is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Nothing requested yet (e.g., empty account id).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last applied request succeeded.
    Success,
    /// The last applied request failed.
    Error,
}

// ============================================================================
// Query State
// ============================================================================

/// Data, status and last error of a query.
#[derive(Debug, Clone, Default)]
pub struct QueryState<T> {
    /// Last successfully fetched data, or the default before any success.
    pub data: T,
    /// Current lifecycle status.
    pub status: QueryStatus,
    /// Error from the last applied request; cleared by the next success.
    pub error: Option<Arc<MirrorError>>,
}

impl<T> QueryState<T> {
    #[must_use]
    pub fn loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }
}

// ============================================================================
// Driver
// ============================================================================

#[derive(Debug)]
struct Completion<T> {
    generation: u64,
    result: Result<T, MirrorError>,
}

/// Runs requests for one query and folds their completions into state.
#[derive(Debug)]
pub(crate) struct QueryDriver<T> {
    resource: &'static str,
    state: QueryState<T>,
    policy: StalePolicy,
    /// Generation of the newest request issued.
    generation: u64,
    /// Completions at or below this generation were cancelled by a reset.
    reset_generation: u64,
    in_flight: usize,
    message_tx: mpsc::UnboundedSender<Completion<T>>,
    message_rx: mpsc::UnboundedReceiver<Completion<T>>,
}

impl<T: Default + Send + 'static> QueryDriver<T> {
    pub(crate) fn new(resource: &'static str, policy: StalePolicy) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            resource,
            state: QueryState::default(),
            policy,
            generation: 0,
            reset_generation: 0,
            in_flight: 0,
            message_tx,
            message_rx,
        }
    }

    pub(crate) fn state(&self) -> &QueryState<T> {
        &self.state
    }

    /// Start a request. Must be called within a Tokio runtime.
    pub(crate) fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = Result<T, MirrorError>> + Send + 'static,
    {
        self.generation += 1;
        self.in_flight += 1;
        self.state.status = QueryStatus::Loading;

        let generation = self.generation;
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            // Panics are reported as a failed request.
            let result = match tokio::spawn(request).await {
                Ok(result) => result,
                Err(err) => Err(MirrorError::task(err.to_string())),
            };
            // Receiver is gone once the query is dropped
            let _ = message_tx.send(Completion { generation, result });
        });
    }

    /// Return to `Idle` with default data.
    ///
    /// Completions of requests issued before the reset are dropped under
    /// every policy.
    pub(crate) fn reset(&mut self) {
        self.reset_generation = self.generation;
        self.state = QueryState::default();
    }

    /// Apply every completion that has already arrived.
    ///
    /// Returns `true` if any completion changed the state.
    pub(crate) fn process_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.message_rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Wait until no request is in flight.
    pub(crate) async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.message_rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, completion: Completion<T>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if completion.generation <= self.reset_generation {
            tracing::debug!(
                resource = self.resource,
                cancelled = completion.generation,
                "dropping mirror node response for cleared input"
            );
            return false;
        }

        if completion.generation != self.generation && self.policy == StalePolicy::DiscardStale {
            tracing::debug!(
                resource = self.resource,
                stale = completion.generation,
                current = self.generation,
                "dropping stale mirror node response"
            );
            return false;
        }

        match completion.result {
            Ok(data) => {
                self.state.data = data;
                self.state.error = None;
                self.state.status = QueryStatus::Success;
            }
            Err(err) => {
                tracing::warn!(resource = self.resource, error = %err, "mirror node query failed");
                self.state.error = Some(Arc::new(err));
                self.state.status = QueryStatus::Error;
            }
        }
        true
    }
}
