//! Catalog: the in-memory store of books and borrowers

use crate::{
    error::{AppError, AppResult},
    models::{Book, Borrower},
};

/// Case-insensitive exact comparison used by every lookup.
/// No partial or fuzzy matching anywhere.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// The catalog owns two ordered collections: the books currently available
/// and the registered borrowers, each holding the books they have out.
///
/// A book added to the catalog lives in exactly one place at a time, either
/// the available list or a single borrower's borrowed list. Borrowing and
/// returning relocate the record; nothing creates, duplicates or destroys
/// it. There is no delete operation.
///
/// All lookups are linear scans and intentionally stay that way; the domain
/// has no performance requirement that would justify an index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    available_books: Vec<Book>,
    borrowers: Vec<Borrower>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from persisted collections.
    pub(crate) fn from_parts(available_books: Vec<Book>, borrowers: Vec<Borrower>) -> Self {
        Self {
            available_books,
            borrowers,
        }
    }

    /// Append a book to the available list. Never fails; duplicate titles
    /// and ISBNs are allowed and kept.
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!("Catalog: added book '{}'", book.title);
        self.available_books.push(book);
    }

    /// Register a borrower. Never fails and performs no duplicate-email
    /// check: registering the same email twice creates two independent
    /// entries, and every subsequent lookup resolves to the first one.
    pub fn register_borrower(&mut self, borrower: Borrower) {
        tracing::debug!("Catalog: registered borrower <{}>", borrower.email);
        self.borrowers.push(borrower);
    }

    /// Books currently available, in insertion order. Borrowed books are
    /// excluded from this view until they come back.
    pub fn available_books(&self) -> &[Book] {
        &self.available_books
    }

    /// All registered borrowers, in registration order.
    pub fn borrowers(&self) -> &[Borrower] {
        &self.borrowers
    }

    /// First available book whose title matches, case-insensitively.
    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.available_books
            .iter()
            .find(|book| eq_ignore_case(&book.title, title))
    }

    /// All available books by the given author, in insertion order.
    /// An unknown author yields an empty list, not an error.
    pub fn books_by_author(&self, author: &str) -> Vec<&Book> {
        self.available_books
            .iter()
            .filter(|book| eq_ignore_case(&book.author, author))
            .collect()
    }

    /// Whether any borrower is registered under this email.
    pub fn is_borrower(&self, email: &str) -> bool {
        self.borrower_index(email).is_some()
    }

    /// First borrower registered under this email.
    pub fn borrower_by_email(&self, email: &str) -> Option<&Borrower> {
        self.borrower_index(email).map(|i| &self.borrowers[i])
    }

    fn borrower_index(&self, email: &str) -> Option<usize> {
        self.borrowers
            .iter()
            .position(|b| eq_ignore_case(&b.email, email))
    }

    /// Lend an available book to a registered borrower.
    ///
    /// The borrower is resolved first; an unknown email fails with
    /// [`AppError::UnknownBorrower`]. The title is then looked up in the
    /// available list only, so a book that is already out and a title that
    /// was never added fail identically with [`AppError::UnknownTitle`].
    /// On failure nothing changes.
    pub fn borrow_book(&mut self, email: &str, title: &str) -> AppResult<()> {
        let borrower = self
            .borrower_index(email)
            .ok_or(AppError::UnknownBorrower)?;
        let book = self
            .available_books
            .iter()
            .position(|b| eq_ignore_case(&b.title, title))
            .ok_or(AppError::UnknownTitle)?;

        let book = self.available_books.remove(book);
        tracing::info!("Loan: '{}' -> <{}>", book.title, self.borrowers[borrower].email);
        self.borrowers[borrower].borrowed.push(book);
        Ok(())
    }

    /// Take a book back from a borrower.
    ///
    /// The borrower is resolved first ([`AppError::UnknownBorrower`] on an
    /// unknown email); the title is then looked up in that borrower's own
    /// list only, so returning a book this borrower never had is
    /// indistinguishable from returning an unknown title
    /// ([`AppError::UnknownTitle`]). The returned book is appended at the
    /// end of the available list, not restored to its original position.
    /// On failure nothing changes.
    pub fn return_book(&mut self, email: &str, title: &str) -> AppResult<()> {
        let borrower = self
            .borrower_index(email)
            .ok_or(AppError::UnknownBorrower)?;
        let book = self.borrowers[borrower]
            .borrowed
            .iter()
            .position(|b| eq_ignore_case(&b.title, title))
            .ok_or(AppError::UnknownTitle)?;

        let book = self.borrowers[borrower].borrowed.remove(book);
        tracing::info!("Return: '{}' <- <{}>", book.title, self.borrowers[borrower].email);
        self.available_books.push(book);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Book 1", "book 1"));
        assert!(eq_ignore_case("ÉTÉ", "été"));
        assert!(!eq_ignore_case("Book 1", "Book 10"));
    }

    #[test]
    fn test_no_partial_match() {
        let mut catalog = Catalog::new();
        catalog.add_book(Book::new("Dune Messiah", "Frank Herbert", "ISBN"));
        assert!(catalog.book_by_title("Dune").is_none());
    }
}
