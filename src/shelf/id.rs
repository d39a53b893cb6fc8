//! # Book Identifiers
//!
//! A book's id is derived from what the book *is*, not from when it was added:
//!
//! ```text
//! key = lower(author) + "-" + lower(title) + "-" + year
//! id  = first 10 hex digits of sha256(key)
//! ```
//!
//! The same tuple always yields the same id, in every process, which is what lets
//! `add` find an existing record without any lookup table. Case is folded on author
//! and title only; the year is used as typed.
//!
//! Ten hex digits is 40 bits. Collisions between distinct tuples are possible in
//! principle and are not handled.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

pub const ID_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn derive(author: &str, title: &str, year: &str) -> Self {
        let key = identity_key(author, title, year);
        let digest = Sha256::digest(key.as_bytes());
        let mut hex = hex::encode(digest);
        hex.truncate(ID_WIDTH);
        BookId(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The normalized string a book's id is hashed from.
pub fn identity_key(author: &str, title: &str, year: &str) -> String {
    format!("{}-{}-{}", author.to_lowercase(), title.to_lowercase(), year)
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId(value.to_string())
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        BookId(value)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
