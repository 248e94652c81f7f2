use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{ItemDraft, NewItem};
use crate::store::ItemStore;

/// Validate a draft and persist it. All checks run before the store is
/// touched, so a rejected draft leaves no partial write behind.
pub fn run<S: ItemStore>(store: &mut S, draft: ItemDraft) -> Result<CmdResult> {
    let fields = validate(draft)?;
    let item = store.insert(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item created: {}",
        item.title
    )));
    result.affected_items.push(item);
    Ok(result)
}

fn validate(draft: ItemDraft) -> Result<NewItem> {
    let title = required(draft.title, "title")?;
    let kind_str = required(draft.kind, "type")?;
    let description = required(draft.description, "description")?;
    let kind = kind_str.parse()?;

    Ok(NewItem {
        title,
        kind,
        description,
        details: draft
            .details
            .map(|d| d.trim().to_string())
            .unwrap_or_default(),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(FolioError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::model::ItemKind;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str, kind: &str, description: &str) -> ItemDraft {
        ItemDraft::new(title, kind, description, None)
    }

    #[test]
    fn creates_item_from_valid_draft() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("React App", "Project", "A SPA")).unwrap();

        assert_eq!(result.affected_items.len(), 1);
        let item = &result.affected_items[0];
        assert_eq!(item.title, "React App");
        assert_eq!(item.kind, ItemKind::Project);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn details_defaults_to_empty() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("Rust", "Skill", "Language")).unwrap();
        assert_eq!(result.affected_items[0].details, "");
    }

    #[test]
    fn trims_title_and_description() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("  Rust  ", "Skill", " lang ")).unwrap();
        assert_eq!(result.affected_items[0].title, "Rust");
        assert_eq!(result.affected_items[0].description, "lang");
    }

    #[test]
    fn rejects_missing_title_without_persisting() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, draft("  ", "Skill", "desc")).unwrap_err();
        assert!(matches!(err, FolioError::MissingField("title")));
        assert!(list::run(&store).unwrap().listed_items.is_empty());
    }

    #[test]
    fn rejects_absent_type() {
        let mut store = InMemoryStore::new();
        let draft = ItemDraft {
            title: Some("X".into()),
            kind: None,
            description: Some("y".into()),
            details: None,
        };
        let err = run(&mut store, draft).unwrap_err();
        assert!(matches!(err, FolioError::MissingField("type")));
    }

    #[test]
    fn rejects_missing_description() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, draft("X", "Skill", "")).unwrap_err();
        assert!(matches!(err, FolioError::MissingField("description")));
    }

    #[test]
    fn rejects_unknown_type_without_persisting() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, draft("X", "Hobby", "y")).unwrap_err();
        assert!(matches!(err, FolioError::InvalidKind(_)));
        assert!(list::run(&store).unwrap().listed_items.is_empty());
    }

    #[test]
    fn fresh_ids_across_creates() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, draft("A", "Skill", "d")).unwrap();
        let b = run(&mut store, draft("B", "Skill", "d")).unwrap();
        assert_ne!(a.affected_items[0].id, b.affected_items[0].id);
    }
}
