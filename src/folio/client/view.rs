//! Snapshot and filter state for the client engine.
//!
//! The engine holds the full collection in [`Workspace::snapshot`] and
//! derives the displayed subset with the pure [`compute_view`] on every
//! state change; nothing here touches the network. Two independent
//! filter dimensions combine conjunctively: the type filter and a
//! case-insensitive substring search over title, description, and
//! details.

use std::collections::HashSet;
use uuid::Uuid;

use crate::model::{Item, ItemKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Kind(ItemKind),
}

#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub search_text: String,
}

/// Apply both filter dimensions, preserving the snapshot's relative
/// order. An empty `details` is just the empty string; it matches only
/// an empty search.
pub fn compute_view<'a>(snapshot: &'a [Item], filter: &FilterState) -> Vec<&'a Item> {
    let needle = filter.search_text.trim().to_lowercase();
    snapshot
        .iter()
        .filter(|item| {
            let kind_matches = match filter.type_filter {
                TypeFilter::All => true,
                TypeFilter::Kind(kind) => item.kind == kind,
            };
            kind_matches && (needle.is_empty() || text_matches(item, &needle))
        })
        .collect()
}

fn text_matches(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.details.to_lowercase().contains(needle)
}

/// Delete lifecycle of a displayed card. A removed card has no state:
/// it is simply gone from the snapshot. There is no editing state, the
/// catalog has no update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Displayed,
    PendingDelete,
}

#[derive(Debug)]
pub struct Card<'a> {
    pub item: &'a Item,
    pub state: CardState,
}

/// The derived view: either cards to show, or a distinct no-results
/// signal. An empty view is never reported as a silently empty list.
#[derive(Debug)]
pub enum View<'a> {
    Cards(Vec<Card<'a>>),
    NoResults,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, View::NoResults)
    }
}

/// The client's entire mutable state: the snapshot of the collection,
/// the filter dimensions, and which cards have a delete in flight.
/// One owning structure, threaded explicitly; no ambient globals.
#[derive(Debug, Default)]
pub struct Workspace {
    snapshot: Vec<Item>,
    filter: FilterState,
    pending_delete: HashSet<Uuid>,
}

impl Workspace {
    /// Seed from a fetch. A failed fetch degrades to an empty snapshot
    /// at the call site; filtering and rendering proceed unchanged.
    pub fn new(snapshot: Vec<Item>) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.filter.type_filter = type_filter;
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.filter.search_text = search_text.into();
    }

    /// Recompute the displayed subset from the current state.
    pub fn view(&self) -> View<'_> {
        let items = compute_view(&self.snapshot, &self.filter);
        if items.is_empty() {
            return View::NoResults;
        }
        View::Cards(
            items
                .into_iter()
                .map(|item| Card {
                    state: if self.pending_delete.contains(&item.id) {
                        CardState::PendingDelete
                    } else {
                        CardState::Displayed
                    },
                    item,
                })
                .collect(),
        )
    }

    /// Local patch after a confirmed create: the new record is the
    /// newest, so it goes to the front. No re-fetch.
    pub fn apply_created(&mut self, item: Item) {
        self.snapshot.insert(0, item);
    }

    /// Mark a card's delete as in flight.
    pub fn begin_delete(&mut self, id: &Uuid) {
        if self.snapshot.iter().any(|item| item.id == *id) {
            self.pending_delete.insert(*id);
        }
    }

    /// Local patch after the store confirmed the delete.
    pub fn confirm_removed(&mut self, id: &Uuid) {
        self.pending_delete.remove(id);
        self.snapshot.retain(|item| item.id != *id);
    }

    /// Roll a failed delete back to the displayed state, so the
    /// snapshot never diverges from the store on a delete error.
    pub fn cancel_delete(&mut self, id: &Uuid) {
        self.pending_delete.remove(id);
    }
}
