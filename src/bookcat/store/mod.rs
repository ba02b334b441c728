//! # Storage Layer
//!
//! The catalog is persisted as a whole: every successful mutation rewrites the
//! full record set. The [`DataStore`] trait hides where that set lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON file
//!   (`library.json` by default) holding an array of books.
//! - [`memory::InMemoryStore`]: keeps the last saved set in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "title": "Война и мир",
//!         "author": "Лев Толстой",
//!         "year": 1869,
//!         "status": "available"
//!     }
//! ]
//! ```
//!
//! Non-ASCII text is written as-is. A missing file reads as an empty catalog.

use crate::error::{CatalogError, Result};
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load the full record set, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored record set with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}

/// Next free id: one past the largest id in use, or 1 for an empty catalog.
/// Fails once the largest id is `u64::MAX`; ids are never wrapped or reused.
pub fn generate_id(books: &[Book]) -> Result<u64> {
    books
        .iter()
        .map(|b| b.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| CatalogError::InvalidInput("No ids left: the largest id is in use".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_starts_at_one() {
        assert_eq!(generate_id(&[]).unwrap(), 1);
    }

    #[test]
    fn uses_max_not_len() {
        let books = vec![
            Book::new(5, "A", "A", 2000),
            Book::new(2, "B", "B", 2001),
        ];
        assert_eq!(generate_id(&books).unwrap(), 6);
    }

    #[test]
    fn max_id_is_an_error_not_a_wrap() {
        let books = vec![Book::new(u64::MAX, "Last", "A", 2000)];
        assert!(matches!(
            generate_id(&books),
            Err(CatalogError::InvalidInput(_))
        ));
    }
}
