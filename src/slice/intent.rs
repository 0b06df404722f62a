//! Slice intents: dispatch and resolution events.

use crate::http::{ApiFailure, Pagination};

/// The operation kinds a slice can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl OpKind {
    /// Slot in the per-kind sequence table.
    pub(crate) fn index(self) -> usize {
        match self {
            OpKind::List => 0,
            OpKind::Get => 1,
            OpKind::Create => 2,
            OpKind::Update => 3,
            OpKind::Delete => 4,
        }
    }

    /// Stable string form for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::List => "list",
            OpKind::Get => "get",
            OpKind::Create => "create",
            OpKind::Update => "update",
            OpKind::Delete => "delete",
        }
    }
}

/// State-transition events folded by [`reduce`].
///
/// `Started` comes from a dispatch; the resolution variants carry the
/// decoded payload of a successful call; `Failed` carries the
/// normalized failure; `Acknowledge` is caller-invoked.
///
/// [`reduce`]: super::reduce
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceIntent<T> {
    Started,
    ListLoaded {
        items: Vec<T>,
        pagination: Option<Pagination>,
    },
    ItemLoaded {
        item: T,
    },
    /// `item` is `None` when a refetch-folded entity's create response
    /// omitted the record; the write is still confirmed.
    Created {
        item: Option<T>,
        append: bool,
    },
    Updated {
        item: T,
    },
    Deleted {
        id: String,
    },
    Failed {
        failure: ApiFailure,
    },
    Acknowledge,
}
