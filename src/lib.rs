//! Headless client core for the Sweety Intimates admin dashboard.
//!
//! Every admin screen shares one request/session lifecycle:
//!
//! ```text
//! view intent ──→ ResourceSlice ──→ Transport ──→ remote API
//!      ↑               │                │
//!      │          pure reduce      SessionStore (token)
//!      └── snapshot ───┘
//! ```
//!
//! - [`http`] performs one network call per invocation and normalizes
//!   every failure into a [`http::RequestOutcome`].
//! - [`slice`] is the generic per-entity cache state machine; entities
//!   differ only in their [`slice::EntityRoutes`] configuration.
//! - [`session`] owns the bearer token and verified profile, persisted
//!   across restarts; slices borrow it read-only.
//! - [`interceptor`] applies the single cross-cutting logout-on-401
//!   policy.
//! - [`client`] wires the whole stack together.

pub mod client;
pub mod config;
pub mod entities;
pub mod http;
pub mod interceptor;
pub mod session;
pub mod slice;
pub mod uploads;

pub use client::AdminClient;
pub use config::ClientConfig;
