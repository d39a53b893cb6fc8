use crate::commands::{CmdMessage, CmdResult, ListedBook, Outcome};
use crate::error::Result;
use crate::id::BookId;
use crate::model::Book;
use crate::store::CatalogStore;
use tracing::debug;

/// Exact-value search. A record matches when the keyword is its id, or when it
/// equals (ignoring case) one whole field: title, author, year, count or status.
/// Substrings never match.
pub fn run<S: CatalogStore>(store: &S, keyword: &str) -> Result<CmdResult> {
    if keyword.is_empty() {
        return Ok(CmdResult::new(Outcome::EmptyKeyword)
            .with_message(CmdMessage::warning("Keyword must be at least one character.")));
    }

    let catalog = store.load()?;
    let needle = keyword.to_lowercase();

    let found: Vec<ListedBook> = catalog
        .into_iter()
        .filter(|(id, book)| is_match(id, book, keyword, &needle))
        .map(|(id, book)| ListedBook::new(id, book))
        .collect();
    debug!(keyword, hits = found.len(), "find_all_by_keyword");

    if found.is_empty() {
        return Ok(CmdResult::new(Outcome::NoMatch)
            .with_message(CmdMessage::info(format!("Nothing found for '{}'.", keyword))));
    }

    Ok(CmdResult::new(Outcome::Listing)
        .with_message(CmdMessage::info(format!("Results for '{}':", keyword)))
        .with_listed_books(found))
}

fn is_match(id: &BookId, book: &Book, keyword: &str, needle: &str) -> bool {
    id.as_str() == keyword
        || book
            .field_texts()
            .iter()
            .any(|field| field.to_lowercase() == needle)
}
