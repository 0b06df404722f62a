//! Cross-cutting handling of invalid-credential responses.
//!
//! The decision to force logout on `Unauthorized` is made here, once,
//! rather than per call site. Slices receive their transport wrapped
//! in [`SessionGuard`]; the session store's own login/verify traffic
//! stays unguarded so a rejected login cannot clear an existing
//! session.

use std::sync::Arc;

use async_trait::async_trait;

use crate::http::{ApiRequest, FailureKind, RequestOutcome, Transport};
use crate::session::SessionStore;

/// Transport wrapper applying the logout-on-401 policy.
///
/// The failure is returned to the caller unchanged; the guard only
/// adds the session side effect.
pub struct SessionGuard {
    inner: Arc<dyn Transport>,
    session: SessionStore,
}

impl SessionGuard {
    pub fn new(inner: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self { inner, session }
    }
}

#[async_trait]
impl Transport for SessionGuard {
    async fn send(&self, request: ApiRequest) -> RequestOutcome {
        let outcome = self.inner.send(request).await;
        if let RequestOutcome::Failure(failure) = &outcome {
            if failure.kind == FailureKind::Unauthorized {
                tracing::warn!("Invalid credential detected, forcing logout");
                self.session.invalidate();
            }
        }
        outcome
    }
}
