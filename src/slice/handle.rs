//! The async dispatch handle around the pure reducer.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::http::decode::{self, DecodeError};
use crate::http::{ApiFailure, ApiRequest, HttpMethod, RequestOutcome, Transport};
use crate::session::TokenProvider;

use super::intent::{OpKind, ResourceIntent};
use super::reducer::reduce;
use super::routes::{CreateFold, EntityRoutes};
use super::state::ResourceState;
use super::{Draft, Entity, ValidationError};

/// Page request for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Latest dispatched sequence per operation kind.
#[derive(Default)]
struct Sequences {
    next: u64,
    latest: [u64; 5],
}

impl Sequences {
    fn begin(&mut self, op: OpKind) -> u64 {
        self.next += 1;
        self.latest[op.index()] = self.next;
        self.next
    }

    fn is_current(&self, op: OpKind, seq: u64) -> bool {
        self.latest[op.index()] == seq
    }
}

/// One per entity type: the cached collection plus the dispatch
/// machinery that drives the transport and folds results back in.
///
/// Concurrent dispatches of the same kind are not deduplicated, but a
/// response superseded by a newer dispatch of its own kind is dropped
/// instead of folded. Responses of *different* kinds intentionally
/// remain last-write-wins: a delete immediately followed by a stale
/// in-flight list can still resurrect the deleted row when the late
/// list response lands, and a follow-up list re-synchronizes.
pub struct ResourceSlice<T: Entity> {
    state: RwLock<ResourceState<T>>,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenProvider>,
    routes: EntityRoutes,
    sequences: Mutex<Sequences>,
}

impl<T: Entity> ResourceSlice<T> {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            state: RwLock::new(ResourceState::default()),
            transport,
            tokens,
            routes: T::routes(),
            sequences: Mutex::new(Sequences::default()),
        }
    }

    /// Immutable snapshot of the current slice state.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.read().clone()
    }

    pub fn routes(&self) -> &EntityRoutes {
        &self.routes
    }

    /// Clear transient success/error markers and return to idle
    /// without touching the collection. Safe to call repeatedly.
    pub fn acknowledge(&self) {
        self.apply(ResourceIntent::Acknowledge);
    }

    /// Fetch the collection. Page parameters are sent only for
    /// paginated entities.
    pub async fn list(&self, page: Option<PageRequest>) {
        let mut path = self.routes.list.to_string();
        if let Some(page) = page {
            if self.routes.paginated {
                path = format!("{}?page={}&limit={}", path, page.page, page.limit);
            }
        }
        self.run_list(path).await;
    }

    /// Entity-specific read variant: fetch the collection filtered by
    /// query parameters, e.g. products by category.
    pub async fn list_with_query(&self, params: &[(&str, &str)]) {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        let path = if query.is_empty() {
            self.routes.list.to_string()
        } else {
            format!("{}?{}", self.routes.list, query)
        };
        self.run_list(path).await;
    }

    /// Fetch one entity into the selected cache.
    pub async fn get_by_id(&self, id: &str) {
        let seq = self.begin(OpKind::Get);
        let request = self.authed(ApiRequest::new(
            HttpMethod::Get,
            format!("{}/{}", self.routes.collection, id),
        ));
        let intent = match self.transport.send(request).await {
            RequestOutcome::Success { payload } => match decode::decode_item::<T>(&payload) {
                Ok(item) => ResourceIntent::ItemLoaded { item },
                Err(source) => parse_failure(source),
            },
            RequestOutcome::Failure(failure) => ResourceIntent::Failed { failure },
        };
        self.resolve(OpKind::Get, seq, intent);
    }

    /// Create an entity.
    ///
    /// Drafts missing required fields are rejected synchronously: no
    /// network call is made and no state transition occurs.
    pub async fn create(&self, draft: &T::Draft) -> Result<(), ValidationError> {
        draft.validate()?;

        let seq = self.begin(OpKind::Create);
        let append = self.routes.create_fold == CreateFold::Append;

        let payload = match draft_payload(draft) {
            Ok(payload) => payload,
            Err(failure) => {
                self.resolve(OpKind::Create, seq, ResourceIntent::Failed { failure });
                return Ok(());
            }
        };

        let request =
            self.authed(ApiRequest::new(HttpMethod::Post, self.routes.collection).json(payload));
        let intent = match self.transport.send(request).await {
            RequestOutcome::Success { payload } => match decode::decode_item::<T>(&payload) {
                Ok(item) => ResourceIntent::Created {
                    item: Some(item),
                    append,
                },
                // A refetch-folded entity may omit the created record;
                // the server still confirmed the write.
                Err(source) if !append => {
                    tracing::debug!(error = %source, "Create response carried no record");
                    ResourceIntent::Created {
                        item: None,
                        append: false,
                    }
                }
                Err(source) => parse_failure(source),
            },
            RequestOutcome::Failure(failure) => ResourceIntent::Failed { failure },
        };
        self.resolve(OpKind::Create, seq, intent);
        Ok(())
    }

    /// Update an entity in place. Validation mirrors [`create`].
    ///
    /// [`create`]: ResourceSlice::create
    pub async fn update(&self, id: &str, draft: &T::Draft) -> Result<(), ValidationError> {
        draft.validate()?;

        let seq = self.begin(OpKind::Update);

        let payload = match draft_payload(draft) {
            Ok(payload) => payload,
            Err(failure) => {
                self.resolve(OpKind::Update, seq, ResourceIntent::Failed { failure });
                return Ok(());
            }
        };

        let request = self.authed(
            ApiRequest::new(
                HttpMethod::Put,
                format!("{}/{}", self.routes.collection, id),
            )
            .json(payload),
        );
        let intent = match self.transport.send(request).await {
            RequestOutcome::Success { payload } => match decode::decode_item::<T>(&payload) {
                Ok(item) => ResourceIntent::Updated { item },
                Err(source) => parse_failure(source),
            },
            RequestOutcome::Failure(failure) => ResourceIntent::Failed { failure },
        };
        self.resolve(OpKind::Update, seq, intent);
        Ok(())
    }

    /// Delete an entity. The fold removes by id from the current
    /// collection; the server response body is not consulted for the
    /// list, and the slice does not check id existence before folding.
    pub async fn delete(&self, id: &str) {
        let seq = self.begin(OpKind::Delete);
        let request = self.authed(ApiRequest::new(
            HttpMethod::Delete,
            format!("{}/{}", self.routes.collection, id),
        ));
        let intent = match self.transport.send(request).await {
            RequestOutcome::Success { .. } => ResourceIntent::Deleted { id: id.to_string() },
            RequestOutcome::Failure(failure) => ResourceIntent::Failed { failure },
        };
        self.resolve(OpKind::Delete, seq, intent);
    }

    async fn run_list(&self, path: String) {
        let seq = self.begin(OpKind::List);
        let request = self.authed(ApiRequest::new(HttpMethod::Get, path));
        let intent = match self.transport.send(request).await {
            RequestOutcome::Success { payload } => {
                match decode::decode_list::<T>(&payload, self.routes.list_key) {
                    Ok(page) => ResourceIntent::ListLoaded {
                        items: page.items,
                        pagination: page.pagination,
                    },
                    Err(source) => parse_failure(source),
                }
            }
            RequestOutcome::Failure(failure) => ResourceIntent::Failed { failure },
        };
        self.resolve(OpKind::List, seq, intent);
    }

    fn begin(&self, op: OpKind) -> u64 {
        let seq = self.sequences.lock().begin(op);
        self.apply(ResourceIntent::Started);
        tracing::debug!(
            op = op.as_str(),
            seq,
            entity = self.routes.collection,
            "Dispatching"
        );
        seq
    }

    /// Fold a resolution unless a newer dispatch of the same kind has
    /// superseded it.
    fn resolve(&self, op: OpKind, seq: u64, intent: ResourceIntent<T>) {
        if !self.sequences.lock().is_current(op, seq) {
            tracing::debug!(op = op.as_str(), seq, "Dropping stale response");
            return;
        }
        self.apply(intent);
    }

    fn apply(&self, intent: ResourceIntent<T>) {
        let mut state = self.state.write();
        let next = reduce(std::mem::take(&mut *state), intent);
        *state = next;
    }

    fn authed(&self, request: ApiRequest) -> ApiRequest {
        // The token is re-read at dispatch time, never cached at slice
        // construction.
        request.bearer(self.tokens.bearer_token())
    }
}

fn parse_failure<T: Entity>(source: DecodeError) -> ResourceIntent<T> {
    ResourceIntent::Failed {
        failure: ApiFailure::parse(source.to_string()),
    }
}

fn draft_payload<D: Draft>(draft: &D) -> Result<serde_json::Value, ApiFailure> {
    serde_json::to_value(draft)
        .map_err(|source| ApiFailure::parse(format!("Failed to serialize draft: {source}")))
}
