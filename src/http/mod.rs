//! HTTP request execution and outcome normalization.
//!
//! One network call per [`HttpExecutor::execute`] invocation; every
//! result — success payload, remote error, transport failure, parse
//! failure — lands in a [`RequestOutcome`]. Callers interpret outcomes
//! by matching, never by catching.

mod body;
pub mod decode;
mod executor;
mod outcome;
mod transport;

pub use body::{RequestBody, UploadPart};
pub use decode::{DecodeError, ListPage, Pagination};
pub use executor::{ApiRequest, HttpExecutor, HttpMethod};
pub use outcome::{ApiFailure, FailureKind, RequestOutcome};
pub use transport::Transport;
