use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FolioError;

/// The closed set of catalog categories.
///
/// Kept as a sum type so an invalid category is rejected when a draft is
/// validated, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Project,
    Certificate,
    Skill,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Project, ItemKind::Certificate, ItemKind::Skill];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Project => "Project",
            ItemKind::Certificate => "Certificate",
            ItemKind::Skill => "Skill",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Project" => Ok(ItemKind::Project),
            "Certificate" => Ok(ItemKind::Certificate),
            "Skill" => Ok(ItemKind::Skill),
            other => Err(FolioError::InvalidKind(other.to_string())),
        }
    }
}

/// A catalog record. Immutable once created; there is no update operation.
///
/// Wire shape: `{id, title, type, description, details, createdAt, updatedAt}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub description: String,
    #[serde(default)]
    pub details: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a full record from validated fields, assigning the id and
    /// both timestamps. `created_at == updated_at` at creation.
    pub fn new(fields: NewItem) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            kind: fields.kind,
            description: fields.description,
            details: fields.details,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The loose request body for create, exactly as it arrives on the wire.
/// Everything is optional here; `commands::create` decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
}

impl ItemDraft {
    pub fn new(title: &str, kind: &str, description: &str, details: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            kind: Some(kind.to_string()),
            description: Some(description.to_string()),
            details: details.map(str::to_string),
        }
    }
}

/// Validated create fields, ready for the store. Constructed only by the
/// service layer, so the store never sees a missing field or a bad kind.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub kind: ItemKind,
    pub description: String,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_rejects_unknown_values() {
        assert!("Hobby".parse::<ItemKind>().is_err());
        assert!("project".parse::<ItemKind>().is_err());
    }

    #[test]
    fn new_item_gets_fresh_id_and_paired_timestamps() {
        let fields = NewItem {
            title: "Rust".into(),
            kind: ItemKind::Skill,
            description: "Systems programming".into(),
            details: String::new(),
        };
        let a = Item::new(fields.clone());
        let b = Item::new(fields);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn item_serializes_with_wire_names() {
        let item = Item::new(NewItem {
            title: "Cert A".into(),
            kind: ItemKind::Certificate,
            description: "desc".into(),
            details: String::new(),
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Certificate");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn draft_tolerates_missing_fields() {
        let draft: ItemDraft = serde_json::from_str("{}").unwrap();
        assert!(draft.title.is_none());
        assert!(draft.kind.is_none());
    }
}
