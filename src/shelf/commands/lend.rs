use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::id::BookId;
use crate::model::Status;
use crate::store::CatalogStore;
use tracing::debug;

/// Lend one copy. The last copy out flips the record to not in stock.
/// Nothing is written unless a copy was actually lent.
pub fn run<S: CatalogStore>(store: &S, id: &BookId) -> Result<CmdResult> {
    let mut catalog = store.load()?;

    let Some(book) = catalog.get_mut(id) else {
        return Ok(CmdResult::new(Outcome::NotFound(id.clone())).with_message(
            CmdMessage::error(format!("No book with id {}, cannot lend.", id)),
        ));
    };

    if book.count == 0 {
        let message = CmdMessage::warning(format!(
            "{} is out of stock, cannot lend.",
            book.describe()
        ));
        let listed = ListedBook::new(id.clone(), book.clone());
        return Ok(CmdResult::new(Outcome::OutOfStock(id.clone()))
            .with_message(message)
            .with_affected_book(listed));
    }

    book.count -= 1;
    if book.count == 0 {
        book.status = Status::NotInStock;
    }
    let message = CmdMessage::success(format!("{} lent.", book.describe()));
    let listed = ListedBook::new(id.clone(), book.clone());

    store.save(&catalog)?;
    debug!(%id, count = listed.book.count, "borrow_book");

    Ok(CmdResult::new(Outcome::Lent(id.clone()))
        .with_message(message)
        .with_affected_book(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn twain() -> BookId {
        BookId::derive("Mark Twain", "Tom Sawyer", "1876")
    }

    #[test]
    fn lending_decrements_count() {
        let fixture = StoreFixture::new().with_book("Tom Sawyer", "Mark Twain", "1876", 2);
        let result = run(&fixture.store, &twain()).unwrap();

        assert_eq!(result.outcome, Outcome::Lent(twain()));
        let book = &fixture.store.snapshot()[&twain()];
        assert_eq!(book.count, 1);
        assert_eq!(book.status, Status::InStock);
        assert_eq!(fixture.store.saves(), 1);
    }

    #[test]
    fn last_copy_marks_not_in_stock() {
        let fixture = StoreFixture::new().with_book("Tom Sawyer", "Mark Twain", "1876", 1);
        run(&fixture.store, &twain()).unwrap();

        let book = &fixture.store.snapshot()[&twain()];
        assert_eq!(book.count, 0);
        assert_eq!(book.status, Status::NotInStock);
    }

    #[test]
    fn exhausted_book_reports_out_of_stock_without_writing() {
        let fixture = StoreFixture::new().with_book("Tom Sawyer", "Mark Twain", "1876", 0);
        let before = fixture.store.snapshot();

        let result = run(&fixture.store, &twain()).unwrap();
        assert_eq!(result.outcome, Outcome::OutOfStock(twain()));
        assert_eq!(fixture.store.saves(), 0);
        assert_eq!(fixture.store.snapshot(), before);
    }

    #[test]
    fn unknown_id_reports_not_found_without_writing() {
        let store = InMemoryStore::new();
        let result = run(&store, &BookId::from("0000000000")).unwrap();
        assert_eq!(result.outcome, Outcome::NotFound(BookId::from("0000000000")));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn count_and_status_stay_consistent_through_adds_and_lends() {
        let store = InMemoryStore::new();
        for step in 0..20 {
            if step % 3 == 0 {
                add::run(&store, "Tom Sawyer", "Mark Twain", "1876").unwrap();
            } else {
                run(&store, &twain()).unwrap();
            }
            let book = &store.snapshot()[&twain()];
            assert_eq!(book.count == 0, book.status == Status::NotInStock);
        }
    }
}
