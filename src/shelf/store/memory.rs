use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell`/`Cell` since shelf is single-threaded; this keeps the
/// `CatalogStore` methods on `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: RefCell<Catalog>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            ..Self::default()
        }
    }

    /// Number of successful `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    /// Current contents, without going through `load`.
    pub fn snapshot(&self) -> Catalog {
        self.catalog.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.borrow().clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::StorageUnavailable {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::other("simulated write error"),
            });
        }
        *self.catalog.borrow_mut() = catalog.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::id::BookId;
    use crate::model::{Book, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed a record directly, bypassing the add command. Does not count as a save.
        pub fn with_book(self, title: &str, author: &str, year: &str, count: u32) -> Self {
            let status = if count == 0 {
                Status::NotInStock
            } else {
                Status::InStock
            };
            self.with_record(title, author, year, count, status)
        }

        pub fn with_record(
            self,
            title: &str,
            author: &str,
            year: &str,
            count: u32,
            status: Status,
        ) -> Self {
            let id = BookId::derive(author, title, year);
            let book = Book {
                title: title.to_string(),
                author: author.to_string(),
                year: year.to_string(),
                count,
                status,
            };
            self.store.catalog.borrow_mut().insert(id, book);
            self
        }
    }
}
