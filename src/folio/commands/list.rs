use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ItemStore;

/// All records, newest first. Filtering is a client-side concern and
/// deliberately does not happen here.
pub fn run<S: ItemStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_all()?;
    Ok(CmdResult::default().with_listed_items(items))
}
