use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;
use uuid::Uuid;

/// Delete by id. A missing id is not an error; the caller always sees
/// success, matching the API contract for DELETE.
pub fn run<S: ItemStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let removed = store.delete_by_id(id)?;

    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!("Item deleted: {}", id)));
    } else {
        result.add_message(CmdMessage::info(format!("No item with id {}", id)));
    }
    Ok(result)
}
