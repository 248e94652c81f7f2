//! # API Facade
//!
//! The single entry point for all catalog operations, regardless of the
//! UI in front of it (HTTP handlers, the CLI client, tests).
//!
//! The facade only dispatches to `commands/*`; business logic lives
//! there and storage behavior in `store/`. It is generic over
//! [`ItemStore`] so the HTTP layer runs on `FileStore` while tests run
//! on `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::ItemDraft;
use crate::store::ItemStore;
use uuid::Uuid;

pub struct FolioApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> FolioApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn remove_item(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn facade_wires_create_list_remove() {
        let mut api = FolioApi::new(InMemoryStore::new());

        let created = api
            .create_item(ItemDraft::new("Cert A", "Certificate", "desc", None))
            .unwrap();
        let id = created.affected_items[0].id;

        let listed = api.list_items().unwrap();
        assert_eq!(listed.listed_items[0].id, id);

        api.remove_item(&id).unwrap();
        assert!(api.list_items().unwrap().listed_items.is_empty());
    }
}
