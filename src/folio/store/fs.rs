use super::{newest_first, ItemStore};
use crate::error::{FolioError, Result};
use crate::model::{Item, NewItem};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_FILENAME: &str = "items.json";

/// File-backed document store: one JSON array in `items.json`, kept in
/// insertion order. Every operation is a single load/modify/write, which
/// gives the per-record atomicity the API needs without any locking of
/// its own.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory and
    /// verifying the data file is readable. Called once at bootstrap;
    /// a failure here is fatal for the process.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir).map_err(FolioError::Io)?;
        let store = Self { data_dir };
        store.load()?;
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn load(&self) -> Result<Vec<Item>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(FolioError::Io)?;
        let items: Vec<Item> = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(FolioError::Serialization)?;
        fs::write(self.data_file(), content).map_err(FolioError::Io)?;
        Ok(())
    }
}

impl ItemStore for FileStore {
    fn insert(&mut self, fields: NewItem) -> Result<Item> {
        let item = Item::new(fields);
        let mut items = self.load()?;
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    fn list_all(&self) -> Result<Vec<Item>> {
        let mut items = self.load()?;
        newest_first(&mut items);
        Ok(items)
    }

    fn delete_by_id(&mut self, id: &Uuid) -> Result<bool> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id != *id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;
    use tempfile::TempDir;

    fn fields(title: &str) -> NewItem {
        NewItem {
            title: title.to_string(),
            kind: ItemKind::Project,
            description: "desc".to_string(),
            details: String::new(),
        }
    }

    #[test]
    fn open_creates_data_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("folio");
        FileStore::open(dir.clone()).unwrap();
        assert!(dir.exists());
    }

    #[test]
    fn insert_persists_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let id = {
            let mut store = FileStore::open(tmp.path().to_path_buf()).unwrap();
            store.insert(fields("A")).unwrap().id
        };

        let store = FileStore::open(tmp.path().to_path_buf()).unwrap();
        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
    }

    #[test]
    fn list_is_newest_first() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path().to_path_buf()).unwrap();
        store.insert(fields("first")).unwrap();
        store.insert(fields("second")).unwrap();
        store.insert(fields("third")).unwrap();

        let items = store.list_all().unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["third", "second", "first"]);
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path().to_path_buf()).unwrap();
        let kept = store.insert(fields("keep")).unwrap();
        let gone = store.insert(fields("drop")).unwrap();

        assert!(store.delete_by_id(&gone.id).unwrap());
        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, kept.id);
    }

    #[test]
    fn delete_missing_id_is_ok_false() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path().to_path_buf()).unwrap();
        assert!(!store.delete_by_id(&Uuid::new_v4()).unwrap());
    }

    #[test]
    fn delete_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::open(tmp.path().to_path_buf()).unwrap();
        let item = store.insert(fields("once")).unwrap();
        assert!(store.delete_by_id(&item.id).unwrap());
        assert!(!store.delete_by_id(&item.id).unwrap());
    }
}
