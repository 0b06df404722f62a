//! Session ownership and durable persistence.
//!
//! The session store is the single owner of the bearer token and the
//! verified profile. Resource slices never mutate it; they hold it
//! only as the read-only [`TokenProvider`] capability and re-read the
//! token at dispatch time, so a logout is visible to the very next
//! dispatch.

mod persistence;
mod store;
mod types;

pub use persistence::{PersistError, SessionFile, StoredSession};
pub use store::{SessionStatus, SessionStore};
pub use types::{Credentials, Profile, SignupRequest};

/// Read-only token capability handed to resource slices.
pub trait TokenProvider: Send + Sync {
    /// The current bearer token, re-read on every call.
    fn bearer_token(&self) -> Option<String>;
}
