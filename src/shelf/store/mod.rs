//! # Storage Layer
//!
//! The catalog is persisted as a whole: a [`CatalogStore`] loads every record into
//! memory and saves every record back. There is no incremental write. Commands do one
//! `load`, apply their change, then (usually) one `save`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON file
//!   - Missing or empty file reads as an empty catalog
//!   - Unparseable content is [`ShelfError::StorageCorrupt`](crate::error::ShelfError::StorageCorrupt)
//!   - Writes go to a temporary sibling which is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts saves so tests can pin down when a command writes
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "<id>": {
//!         "title": "Tom Sawyer",
//!         "author": "Mark Twain",
//!         "year": "1876",
//!         "count": 2,
//!         "status": "in stock"
//!     }
//! }
//! ```
//!
//! No locking is done. Two processes sharing a file can lose each other's updates.

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
///
/// Methods take `&self`; in-memory implementations use interior mutability.
pub trait CatalogStore {
    /// Load the full catalog. An absent catalog is empty, not an error.
    fn load(&self) -> Result<Catalog>;

    /// Replace the stored catalog with `catalog`.
    fn save(&self, catalog: &Catalog) -> Result<()>;
}
