//! Borrower model

use serde::{Deserialize, Serialize};

use super::book::Book;

/// A registered borrower. The email is the sole identity key for all
/// operations and is matched case-insensitively; no duplicate check is
/// performed at registration, so two entries may share an email and every
/// lookup resolves to the first one registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub name: String,
    pub email: String,
    /// Books currently held, in borrow order.
    #[serde(default)]
    pub borrowed: Vec<Book>,
}

impl Borrower {
    /// Create a borrower with an empty borrowed list.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            borrowed: Vec::new(),
        }
    }

    /// Books this borrower currently holds, in borrow order.
    pub fn borrowed_books(&self) -> &[Book] {
        &self.borrowed
    }
}
