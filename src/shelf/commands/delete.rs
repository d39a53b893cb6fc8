use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::id::BookId;
use crate::store::CatalogStore;
use tracing::debug;

/// Remove a record entirely. No tombstone is kept.
pub fn run<S: CatalogStore>(store: &S, id: &BookId) -> Result<CmdResult> {
    let mut catalog = store.load()?;

    let Some(book) = catalog.shift_remove(id) else {
        return Ok(CmdResult::new(Outcome::NotFound(id.clone())).with_message(
            CmdMessage::error(format!("No book with id {}, cannot delete.", id)),
        ));
    };

    store.save(&catalog)?;
    debug!(%id, "delete_book_by_id");

    Ok(CmdResult::new(Outcome::Deleted(id.clone()))
        .with_message(CmdMessage::success(format!("Book with id {} deleted.", id)))
        .with_affected_book(ListedBook::new(id.clone(), book)))
}
