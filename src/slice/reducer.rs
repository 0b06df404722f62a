//! Pure fold rules for the resource slice.

use super::intent::ResourceIntent;
use super::state::{ResourceState, SliceStatus};
use super::Entity;

/// Fold one intent into the next state.
///
/// This is the only place where slice state transitions happen. It is
/// a pure function with no I/O and no locking; the handle owns
/// everything impure around it.
pub fn reduce<T: Entity>(state: ResourceState<T>, intent: ResourceIntent<T>) -> ResourceState<T> {
    match intent {
        ResourceIntent::Started => ResourceState {
            status: SliceStatus::Loading,
            error: None,
            ..state
        },

        ResourceIntent::ListLoaded { items, pagination } => ResourceState {
            items,
            // Pagination is trusted only from the most recent
            // list-class response; mutations never touch it.
            pagination,
            status: SliceStatus::Succeeded,
            ..state
        },

        ResourceIntent::ItemLoaded { item } => ResourceState {
            selected: Some(item),
            status: SliceStatus::Succeeded,
            ..state
        },

        ResourceIntent::Created { item, append } => {
            let mut next = state;
            if append {
                if let Some(item) = &item {
                    next.items.push(item.clone());
                }
            }
            next.last_created = item;
            next.status = SliceStatus::Succeeded;
            next
        }

        ResourceIntent::Updated { item } => {
            let mut next = state;
            // Replace in place, preserving order. An id filtered out of
            // the current view is a no-op on the collection but the
            // mutation is still recorded.
            if let Some(slot) = next
                .items
                .iter_mut()
                .find(|existing| existing.id() == item.id())
            {
                *slot = item.clone();
            }
            next.last_updated = Some(item);
            next.status = SliceStatus::Succeeded;
            next
        }

        ResourceIntent::Deleted { id } => {
            let mut next = state;
            // Removal is by identity from the current collection, not
            // from a server-returned list.
            next.items.retain(|existing| existing.id() != id);
            next.last_deleted_id = Some(id);
            next.status = SliceStatus::Succeeded;
            next
        }

        ResourceIntent::Failed { failure } => ResourceState {
            // Failed operations never partially mutate the collection.
            status: SliceStatus::Failed,
            error: Some(failure),
            ..state
        },

        ResourceIntent::Acknowledge => ResourceState {
            status: SliceStatus::Idle,
            error: None,
            last_created: None,
            last_updated: None,
            last_deleted_id: None,
            ..state
        },
    }
}
