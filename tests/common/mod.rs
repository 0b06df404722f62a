//! Shared test doubles and fixtures.

#![allow(dead_code)]

pub mod server;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use sweety_admin::http::{ApiFailure, ApiRequest, FailureKind, RequestOutcome, Transport};
use sweety_admin::session::TokenProvider;

/// A queued reply for the mock transport.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub outcome: RequestOutcome,
    pub delay_ms: u64,
}

impl MockReply {
    pub fn success(payload: Value) -> Self {
        Self {
            outcome: RequestOutcome::Success { payload },
            delay_ms: 0,
        }
    }

    pub fn failure(kind: FailureKind, message: &str, http_status: Option<u16>) -> Self {
        Self {
            outcome: RequestOutcome::Failure(ApiFailure {
                kind,
                message: message.to_string(),
                http_status,
                raw: None,
            }),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// In-memory transport double: captures requests, replays queued
/// replies, counts calls.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Enqueue a reply to be returned for the next request.
    pub fn enqueue(&self, reply: MockReply) {
        self.replies.lock().push_back(reply);
    }

    /// Get all captured requests.
    pub fn captured(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> RequestOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request);

        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| MockReply::success(json!({"ok": true})));

        if reply.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(reply.delay_ms)).await;
        }
        reply.outcome
    }
}

/// Install a log subscriber for a test run. Safe to call repeatedly.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Token capability double with a fixed token.
pub struct StaticTokens(pub Option<String>);

impl TokenProvider for StaticTokens {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn tokens(token: Option<&str>) -> Arc<StaticTokens> {
    Arc::new(StaticTokens(token.map(str::to_string)))
}

// -- Wire fixtures ------------------------------------------------------------

pub fn category_json(id: &str, name: &str) -> Value {
    json!({"_id": id, "name": name})
}

pub fn order_json(id: &str, total: f64) -> Value {
    json!({
        "_id": id,
        "customerName": "Dana",
        "email": "dana@example.com",
        "items": [],
        "total": total,
        "status": "pending",
        "createdAt": "2024-05-01T10:00:00Z"
    })
}

pub fn profile_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": "admin@example.com",
        "role": "admin"
    })
}
