//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for catalog operations, whatever the UI.
//!
//! `ShelfApi<S: CatalogStore>` owns the store handle, so there is no ambient
//! catalog state: production code builds it over a `FileStore`, tests over an
//! `InMemoryStore`.
//!
//! The API does no business logic and no printing. Ids arrive as plain text from
//! the UI and are wrapped into [`BookId`] here.

use crate::commands;
use crate::error::Result;
use crate::id::BookId;
use crate::store::CatalogStore;

pub struct ShelfApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_update_book(
        &self,
        title: &str,
        author: &str,
        year: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, title, author, year)
    }

    pub fn borrow_book(&self, id: &str) -> Result<commands::CmdResult> {
        commands::lend::run(&self.store, &BookId::from(id))
    }

    pub fn delete_book_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, &BookId::from(id))
    }

    pub fn change_status_by_id(&self, id: &str, new_status: &str) -> Result<commands::CmdResult> {
        commands::status::run(&self.store, &BookId::from(id), new_status)
    }

    pub fn find_all_by_keyword(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keyword)
    }

    pub fn print_all_books_info(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, ListedBook, MessageLevel, Outcome};
