//! Manual status override.
//!
//! Unlike the other mutating commands this one saves the catalog on every path,
//! including unknown ids and rejected statuses, where the write is a no-op.

use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::id::BookId;
use crate::model::{Status, IN_STOCK, NOT_IN_STOCK};
use crate::store::CatalogStore;
use tracing::debug;

pub fn run<S: CatalogStore>(store: &S, id: &BookId, new_status: &str) -> Result<CmdResult> {
    let mut catalog = store.load()?;
    let requested = new_status.to_lowercase();

    let result = match catalog.get_mut(id) {
        None => CmdResult::new(Outcome::NotFound(id.clone())).with_message(CmdMessage::error(
            format!("No book with id {}, cannot change status.", id),
        )),
        Some(book) => match Status::parse(&requested) {
            Some(status) if status == book.status => CmdResult::new(Outcome::StatusUnchanged(
                id.clone(),
            ))
            .with_message(CmdMessage::info(format!(
                "Status '{}' is already set, nothing changed.",
                requested
            ))),
            Some(status) => {
                book.status = status;
                match status {
                    Status::InStock => book.count = book.count.saturating_add(1),
                    Status::NotInStock => book.count = 0,
                }
                CmdResult::new(Outcome::StatusChanged(id.clone()))
                    .with_message(CmdMessage::success(format!(
                        "Status '{}' applied to book with id {}.",
                        requested, id
                    )))
                    .with_affected_book(ListedBook::new(id.clone(), book.clone()))
            }
            None => CmdResult::new(Outcome::UnsupportedStatus(requested.clone())).with_message(
                CmdMessage::error(format!(
                    "Status '{}' is not supported. Allowed values are '{}', '{}'.",
                    requested, IN_STOCK, NOT_IN_STOCK
                )),
            ),
        },
    };

    store.save(&catalog)?;
    debug!(%id, outcome = ?result.outcome, "change_status_by_id");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn dune() -> BookId {
        BookId::derive("Frank Herbert", "Dune", "1965")
    }

    #[test]
    fn not_in_stock_zeroes_count() {
        let fixture = StoreFixture::new().with_book("Dune", "Frank Herbert", "1965", 4);
        let result = run(&fixture.store, &dune(), "Not In Stock").unwrap();

        assert_eq!(result.outcome, Outcome::StatusChanged(dune()));
        let book = &fixture.store.snapshot()[&dune()];
        assert_eq!(book.count, 0);
        assert_eq!(book.status, Status::NotInStock);
    }

    #[test]
    fn in_stock_adds_one_copy() {
        let fixture = StoreFixture::new().with_book("Dune", "Frank Herbert", "1965", 0);
        let result = run(&fixture.store, &dune(), "IN STOCK").unwrap();

        assert_eq!(result.outcome, Outcome::StatusChanged(dune()));
        let book = &fixture.store.snapshot()[&dune()];
        assert_eq!(book.count, 1);
        assert_eq!(book.status, Status::InStock);
    }

    #[test]
    fn same_status_is_unchanged_but_still_saved() {
        let fixture = StoreFixture::new().with_book("Dune", "Frank Herbert", "1965", 2);
        let before = fixture.store.snapshot();

        let result = run(&fixture.store, &dune(), "in stock").unwrap();
        assert_eq!(result.outcome, Outcome::StatusUnchanged(dune()));
        assert_eq!(fixture.store.snapshot(), before);
        assert_eq!(fixture.store.saves(), 1);
    }

    #[test]
    fn unsupported_status_is_rejected_but_still_saved() {
        let fixture = StoreFixture::new().with_book("Dune", "Frank Herbert", "1965", 2);
        let before = fixture.store.snapshot();

        let result = run(&fixture.store, &dune(), "Lost").unwrap();
        assert_eq!(result.outcome, Outcome::UnsupportedStatus("lost".to_string()));
        assert!(result.messages[0].content.contains("'in stock', 'not in stock'"));
        assert_eq!(fixture.store.snapshot(), before);
        assert_eq!(fixture.store.saves(), 1);
    }

    #[test]
    fn unknown_id_is_not_found_but_still_saved() {
        let store = InMemoryStore::new();
        let result = run(&store, &dune(), "in stock").unwrap();
        assert_eq!(result.outcome, Outcome::NotFound(dune()));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn out_then_in_leaves_a_single_copy() {
        let fixture = StoreFixture::new().with_book("Dune", "Frank Herbert", "1965", 3);
        run(&fixture.store, &dune(), "not in stock").unwrap();
        run(&fixture.store, &dune(), "in stock").unwrap();
        assert_eq!(fixture.store.snapshot()[&dune()].count, 1);
    }
}
