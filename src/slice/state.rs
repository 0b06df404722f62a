//! Slice state snapshots.

use crate::http::{ApiFailure, Pagination};

/// Lifecycle of the slice's current operation series.
///
/// `Idle` is re-entered only by an explicit acknowledgement, never
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Immutable per-entity cache snapshot.
///
/// Snapshots are cloned out of the handle; mutating one never affects
/// the slice, so the view layer can read without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Server-order collection; not necessarily sorted.
    pub items: Vec<T>,
    /// Single-selected-entity cache for detail screens.
    pub selected: Option<T>,
    /// Present only after a paginated list success.
    pub pagination: Option<Pagination>,
    pub status: SliceStatus,
    /// Last failure; cleared on the next dispatch.
    pub error: Option<ApiFailure>,
    /// Transient marker, cleared by acknowledgement.
    pub last_created: Option<T>,
    /// Transient marker, cleared by acknowledgement.
    pub last_updated: Option<T>,
    /// Transient marker, cleared by acknowledgement.
    pub last_deleted_id: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            pagination: None,
            status: SliceStatus::default(),
            error: None,
            last_created: None,
            last_updated: None,
            last_deleted_id: None,
        }
    }
}
