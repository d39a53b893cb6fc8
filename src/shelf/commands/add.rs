use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::id::BookId;
use crate::model::{Book, Status};
use crate::store::CatalogStore;
use tracing::debug;

/// Add a copy of a book. A new (author, title, year) tuple creates a record; a
/// known one gets another copy and is put back in stock.
pub fn run<S: CatalogStore>(
    store: &S,
    title: &str,
    author: &str,
    year: &str,
) -> Result<CmdResult> {
    let id = BookId::derive(author, title, year);
    let mut catalog = store.load()?;

    let (outcome, message, book) = match catalog.get_mut(&id) {
        Some(book) => {
            book.count = book.count.saturating_add(1);
            book.status = Status::InStock;
            let message = CmdMessage::success(format!(
                "Book with id {} updated, {} in stock.",
                id, book.count
            ));
            (Outcome::Updated(id.clone()), message, book.clone())
        }
        None => {
            let book = Book::new(title, author, year);
            catalog.insert(id.clone(), book.clone());
            let message = CmdMessage::success(format!("Book added with id {}.", id));
            (Outcome::Created(id.clone()), message, book)
        }
    };

    store.save(&catalog)?;
    debug!(%id, count = book.count, "add_update_book");

    Ok(CmdResult::new(outcome)
        .with_message(message)
        .with_affected_book(ListedBook::new(id, book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_new_record_with_one_copy() {
        let store = InMemoryStore::new();
        let result = run(&store, "Tom Sawyer", "Mark Twain", "1876").unwrap();

        let id = BookId::derive("Mark Twain", "Tom Sawyer", "1876");
        assert_eq!(result.outcome, Outcome::Created(id.clone()));

        let catalog = store.snapshot();
        let book = &catalog[&id];
        assert_eq!(book.count, 1);
        assert_eq!(book.status, Status::InStock);
        assert_eq!(book.title, "Tom Sawyer");
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn same_tuple_in_any_case_updates_the_same_record() {
        let store = InMemoryStore::new();
        let first = run(&store, "Tom Sawyer", "Mark Twain", "1876").unwrap();
        let second = run(&store, "TOM SAWYER", "mark twain", "1876").unwrap();

        let id = BookId::derive("Mark Twain", "Tom Sawyer", "1876");
        assert_eq!(first.outcome, Outcome::Created(id.clone()));
        assert_eq!(second.outcome, Outcome::Updated(id.clone()));

        let catalog = store.snapshot();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[&id].count, 2);
        // First spelling wins
        assert_eq!(catalog[&id].title, "Tom Sawyer");
    }

    #[test]
    fn n_adds_give_count_n() {
        let store = InMemoryStore::new();
        for _ in 0..5 {
            run(&store, "Dune", "Frank Herbert", "1965").unwrap();
        }
        let id = BookId::derive("Frank Herbert", "Dune", "1965");
        let catalog = store.snapshot();
        assert_eq!(catalog[&id].count, 5);
        assert_eq!(catalog[&id].status, Status::InStock);
        assert_eq!(store.saves(), 5);
    }

    #[test]
    fn update_forces_status_back_in_stock() {
        let fixture =
            StoreFixture::new().with_record("Dune", "Frank Herbert", "1965", 3, Status::NotInStock);
        run(&fixture.store, "Dune", "Frank Herbert", "1965").unwrap();

        let id = BookId::derive("Frank Herbert", "Dune", "1965");
        let book = &fixture.store.snapshot()[&id];
        assert_eq!(book.count, 4);
        assert_eq!(book.status, Status::InStock);
    }

    #[test]
    fn write_failure_is_propagated() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(run(&store, "Dune", "Frank Herbert", "1965").is_err());
        assert!(store.snapshot().is_empty());
    }
}
