use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::store::CatalogStore;

/// Every record, in catalog order. Read-only.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    let listed: Vec<ListedBook> = catalog
        .into_iter()
        .map(|(id, book)| ListedBook::new(id, book))
        .collect();

    let mut result = CmdResult::new(Outcome::Listing);
    if listed.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_books(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let store = InMemoryStore::new();
        add::run(&store, "Zebra", "Z", "2000").unwrap();
        add::run(&store, "Apple", "A", "1999").unwrap();
        add::run(&store, "Zebra", "Z", "2000").unwrap();

        let result = run(&store).unwrap();
        let titles: Vec<_> = result
            .listed_books
            .iter()
            .map(|lb| lb.book.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Zebra", "Apple"]);
        assert_eq!(result.listed_books[0].book.count, 2);
    }

    #[test]
    fn empty_catalog_lists_nothing_and_says_so() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.outcome, Outcome::Listing);
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(store.saves(), 0);
    }
}
