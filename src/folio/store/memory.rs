use super::{newest_first, ItemStore};
use crate::error::Result;
use crate::model::{Item, NewItem};
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data. The Vec keeps insertion order, which the
/// ordering contract relies on for timestamp ties.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn insert(&mut self, fields: NewItem) -> Result<Item> {
        let item = Item::new(fields);
        self.items.push(item.clone());
        Ok(item)
    }

    fn list_all(&self) -> Result<Vec<Item>> {
        let mut items = self.items.clone();
        newest_first(&mut items);
        Ok(items)
    }

    fn delete_by_id(&mut self, id: &Uuid) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        Ok(self.items.len() != before)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ItemKind;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, title: &str, kind: ItemKind) -> Self {
            self.store
                .insert(NewItem {
                    title: title.to_string(),
                    kind,
                    description: format!("About {}", title),
                    details: String::new(),
                })
                .unwrap();
            self
        }

        pub fn with_items(mut self, count: usize, kind: ItemKind) -> Self {
            for i in 0..count {
                self = self.with_item(&format!("Test Item {}", i + 1), kind);
            }
            self
        }
    }
}
