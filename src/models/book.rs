//! Book (catalog entry) model

use serde::{Deserialize, Serialize};

/// A single catalog entry. Books are immutable once created; lending moves
/// the whole record between the catalog's available list and a borrower's
/// borrowed list, it never mutates or copies it.
///
/// Titles are the matching key for every lookup (case-insensitive). Nothing
/// enforces uniqueness of titles or ISBNs; when duplicates exist, the first
/// entry in insertion order wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}",
            self.title, self.author, self.isbn
        )
    }
}
