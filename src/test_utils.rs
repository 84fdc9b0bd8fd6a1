//! Shared test utilities and Mother pattern factories.
//!
//! `ScriptedFetch` stands in for the HTTP client: responses are registered
//! per URL, and a URL can be gated so a test decides when its request
//! completes.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

use crate::client::{Fetch, FetchResponse};
use crate::context::HieroProvider;
use crate::domain::{MirrorError, Network};
use crate::query::StalePolicy;

/// Base URL every scripted provider uses.
pub const TEST_BASE_URL: &str = "http://mirror.test";

// ============================================================================
// Scripted Fetch
// ============================================================================

#[derive(Debug, Default)]
pub struct ScriptedFetch {
    responses: Mutex<HashMap<String, FetchResponse>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetch {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `path` (relative to [`TEST_BASE_URL`]) with `status` and `body`.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url(path), FetchResponse::new(status, body));
    }

    /// Answer `path` with a 200 and the given JSON.
    pub fn respond_json(&self, path: &str, body: Value) {
        self.respond(path, 200, body.to_string());
    }

    /// Hold requests to `path` until [`Self::release`] is called.
    pub fn gate(&self, path: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(url(path), Arc::new(Notify::new()));
    }

    /// Let one held request to `path` complete.
    pub fn release(&self, path: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(&url(path)) {
            gate.notify_one();
        }
    }

    /// Every URL fetched so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of times `path` was fetched.
    #[must_use]
    pub fn request_count(&self, path: &str) -> usize {
        let target = url(path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| **u == target)
            .count()
    }
}

#[async_trait]
impl Fetch for ScriptedFetch {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, MirrorError> {
        self.requests.lock().unwrap().push(url.to_string());

        let gate = self.gates.lock().unwrap().get(url).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        // Read after the gate so tests can change the answer while held.
        let response = self.responses.lock().unwrap().get(url).cloned();
        Ok(response.unwrap_or_else(|| FetchResponse::new(404, r#"{"_status":"not found"}"#)))
    }
}

fn url(path: &str) -> String {
    format!("{TEST_BASE_URL}{path}")
}

/// Provider wired to `fetch` with the given stale policy.
#[must_use]
pub fn scripted_provider(fetch: &Arc<ScriptedFetch>, policy: StalePolicy) -> HieroProvider {
    HieroProvider::builder(Network::TestNet)
        .mirror_node_url(TEST_BASE_URL)
        .fetcher(fetch.clone())
        .stale_policy(policy)
        .build()
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct MirrorJsonMother;

impl MirrorJsonMother {
    #[must_use]
    pub fn account(account_id: &str, tinybars: i64) -> Value {
        json!({
            "account": account_id,
            "balance": {
                "balance": tinybars,
                "timestamp": "1700000000.000000000",
                "tokens": []
            },
            "deleted": false,
            "memo": ""
        })
    }

    #[must_use]
    pub fn tokens() -> Value {
        json!({
            "tokens": [
                {
                    "token_id": "0.0.456858",
                    "symbol": "USDC",
                    "balance": 1_500_000,
                    "decimals": 6,
                    "freeze_status": "UNFROZEN"
                },
                { "token_id": "0.0.1001", "balance": 42 },
                { "token_id": "0.0.1002", "symbol": "", "balance": 7, "decimals": null }
            ],
            "links": { "next": null }
        })
    }

    #[must_use]
    pub fn single_token(token_id: &str, balance: u64) -> Value {
        json!({
            "tokens": [
                { "token_id": token_id, "symbol": "TKN", "balance": balance, "decimals": 2 }
            ]
        })
    }

    #[must_use]
    pub fn nfts() -> Value {
        json!({
            "nfts": [
                {
                    "token_id": "0.0.5000",
                    "serial_number": 1,
                    "metadata": "aXBmczovL2JhZnliZWlnZHlyenQ=",
                    "account_id": "0.0.1234"
                },
                { "token_id": "0.0.5000", "serial_number": 2, "metadata": null },
                { "token_id": "0.0.5001", "serial_number": 9 }
            ],
            "links": { "next": null }
        })
    }

    #[must_use]
    pub fn nfts_with_bad_metadata() -> Value {
        json!({
            "nfts": [
                { "token_id": "0.0.5000", "serial_number": 1, "metadata": "aGVsbG8=" },
                { "token_id": "0.0.5000", "serial_number": 3, "metadata": "!!not base64!!" }
            ]
        })
    }

    #[must_use]
    pub fn transactions() -> Value {
        json!({
            "transactions": [
                {
                    "transaction_id": "0.0.1234-1700000000-000000000",
                    "name": "CRYPTOTRANSFER",
                    "result": "SUCCESS",
                    "consensus_timestamp": "1700000001.123456789",
                    "charged_tx_fee": 84_000,
                    "transfers": [
                        { "account": "0.0.1234", "amount": -100_084_000, "is_approval": false },
                        { "account": "0.0.5678", "amount": 100_000_000, "is_approval": false },
                        { "account": "0.0.98", "amount": 84_000, "is_approval": false }
                    ]
                },
                {
                    "transaction_id": "0.0.1234-1700000100-000000000",
                    "name": "TOKENASSOCIATE",
                    "result": "INSUFFICIENT_PAYER_BALANCE",
                    "consensus_timestamp": "1700000101.000000000"
                }
            ],
            "links": { "next": "/api/v1/transactions?account.id=0.0.1234&limit=2&timestamp=lt:1700000101.000000000" }
        })
    }

    #[must_use]
    pub fn single_transaction(transaction_id: &str) -> Value {
        json!({
            "transactions": [
                {
                    "transaction_id": transaction_id,
                    "name": "CRYPTOTRANSFER",
                    "result": "SUCCESS",
                    "consensus_timestamp": "1700000200.000000000",
                    "transfers": []
                }
            ]
        })
    }
}
