//! The generic resource-slice state machine.
//!
//! Every entity screen follows one unidirectional cycle:
//!
//! ```text
//! dispatch ──→ transport ──→ intent ──→ reduce ──→ snapshot
//!     ↑                                               │
//!     └────────────── view binding ───────────────────┘
//! ```
//!
//! - **State**: immutable per-entity cache ([`ResourceState`])
//! - **Intent**: dispatch and resolution events ([`ResourceIntent`])
//! - **Reducer**: pure function folding an intent into the next state
//!
//! [`reduce`] is the only place where slice state transitions happen;
//! the async handle ([`ResourceSlice`]) owns sequencing, validation
//! and transport plumbing around it. Entities differ only in their
//! [`EntityRoutes`] configuration — the machinery is written once.

mod handle;
mod intent;
mod reducer;
mod routes;
mod state;

pub use handle::{PageRequest, ResourceSlice};
pub use intent::{OpKind, ResourceIntent};
pub use reducer::reduce;
pub use routes::{CreateFold, EntityRoutes};
pub use state::{ResourceState, SliceStatus};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// A create/update submission missing a required field, detected
/// client-side before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A create/update payload that knows its required fields.
pub trait Draft: Serialize + Send + Sync {
    /// Check required fields. An `Err` means the submission must not
    /// reach the network.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// An entity cached by a [`ResourceSlice`].
pub trait Entity:
    DeserializeOwned + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// The create/update payload for this entity.
    type Draft: Draft;

    /// Stable identity used by the update and delete folds.
    fn id(&self) -> &str;

    /// Endpoint paths and fold hints for this entity.
    fn routes() -> EntityRoutes;
}
