//! The transport seam between callers and the network.

use async_trait::async_trait;

use super::executor::ApiRequest;
use super::outcome::RequestOutcome;

/// Performs exactly one network call per invocation.
///
/// Implemented by the HTTP executor for real traffic and by in-memory
/// doubles in tests. Implementations must resolve every internal error
/// into the returned outcome; nothing may panic or throw past this
/// boundary.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> RequestOutcome;
}
