//! # Command Layer
//!
//! Each module implements one catalog operation as a `run` function generic over
//! [`CatalogStore`](crate::store::CatalogStore). A call performs the whole
//! read-mutate-write cycle itself and returns a [`CmdResult`]:
//!
//! - [`Outcome`] says *what happened*, for callers and tests
//! - `messages` say it in words, for the operator
//! - `affected_books` / `listed_books` carry the records involved
//!
//! Only storage faults are returned as `Err`.

use crate::id::BookId;
use crate::model::Book;

pub mod add;
pub mod delete;
pub mod lend;
pub mod list;
pub mod search;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(BookId),
    Updated(BookId),
    Lent(BookId),
    Deleted(BookId),
    StatusChanged(BookId),
    StatusUnchanged(BookId),
    NotFound(BookId),
    OutOfStock(BookId),
    /// Carries the rejected status, lower-cased.
    UnsupportedStatus(String),
    EmptyKeyword,
    NoMatch,
    Listing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog record together with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedBook {
    pub id: BookId,
    pub book: Book,
}

impl ListedBook {
    pub fn new(id: BookId, book: Book) -> Self {
        Self { id, book }
    }
}

#[derive(Debug)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub affected_books: Vec<ListedBook>,
    pub listed_books: Vec<ListedBook>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            affected_books: Vec::new(),
            listed_books: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_book(mut self, book: ListedBook) -> Self {
        self.affected_books.push(book);
        self
    }

    pub fn with_listed_books(mut self, books: Vec<ListedBook>) -> Self {
        self.listed_books = books;
        self
    }
}
