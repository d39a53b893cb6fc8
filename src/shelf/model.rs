use crate::id::BookId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The whole catalog, keyed by id, in the order records were first stored.
pub type Catalog = IndexMap<BookId, Book>;

pub const IN_STOCK: &str = "in stock";
pub const NOT_IN_STOCK: &str = "not in stock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    // Aliases accept data files written by the Russian-language console tool.
    #[serde(rename = "in stock", alias = "в наличии")]
    InStock,
    #[serde(rename = "not in stock", alias = "нет в наличии")]
    NotInStock,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::InStock, Status::NotInStock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InStock => IN_STOCK,
            Status::NotInStock => NOT_IN_STOCK,
        }
    }

    /// Case-insensitive match against the two recognized literals.
    pub fn parse(input: &str) -> Option<Status> {
        let lowered = input.to_lowercase();
        Status::ALL.into_iter().find(|s| s.as_str() == lowered)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
    pub count: u32,
    pub status: Status,
}

impl Book {
    /// A freshly catalogued book: one copy on the shelf.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            count: 1,
            status: Status::InStock,
        }
    }

    /// Every field rendered as text, in storage order.
    pub fn field_texts(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.author.clone(),
            self.year.clone(),
            self.count.to_string(),
            self.status.to_string(),
        ]
    }

    /// "'Title' by Author (Year)", used in operator messages.
    pub fn describe(&self) -> String {
        format!("'{}' by {} ({})", self.title, self.author, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(Status::parse("In Stock"), Some(Status::InStock));
        assert_eq!(Status::parse("NOT IN STOCK"), Some(Status::NotInStock));
        assert_eq!(Status::parse("lost"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn status_serializes_as_literal() {
        let json = serde_json::to_string(&Status::NotInStock).unwrap();
        assert_eq!(json, "\"not in stock\"");
    }

    #[test]
    fn status_accepts_legacy_literals() {
        let s: Status = serde_json::from_str("\"в наличии\"").unwrap();
        assert_eq!(s, Status::InStock);
        let s: Status = serde_json::from_str("\"нет в наличии\"").unwrap();
        assert_eq!(s, Status::NotInStock);
    }

    #[test]
    fn unknown_status_does_not_deserialize() {
        assert!(serde_json::from_str::<Status>("\"lost\"").is_err());
    }

    #[test]
    fn negative_count_is_rejected() {
        let raw = r#"{"title":"T","author":"A","year":"1","count":-1,"status":"in stock"}"#;
        assert!(serde_json::from_str::<Book>(raw).is_err());
    }

    #[test]
    fn new_book_has_one_copy_in_stock() {
        let book = Book::new("Tom Sawyer", "Mark Twain", "1876");
        assert_eq!(book.count, 1);
        assert_eq!(book.status, Status::InStock);
        assert_eq!(
            book.field_texts(),
            ["Tom Sawyer", "Mark Twain", "1876", "1", "in stock"].map(String::from)
        );
    }
}
