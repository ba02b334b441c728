use super::DataStore;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing.
/// Holds whatever was last saved; `saves` counts calls to [`DataStore::save`].
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books, saves: 0 }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::CatalogError;
    use std::io;

    /// Loads a fixed set of books and refuses every save.
    pub struct FailingStore {
        books: Vec<Book>,
    }

    impl FailingStore {
        pub fn with_books(books: Vec<Book>) -> Self {
            Self { books }
        }
    }

    impl DataStore for FailingStore {
        fn load(&self) -> Result<Vec<Book>> {
            Ok(self.books.clone())
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Err(CatalogError::Io(io::Error::other("disk full")))
        }
    }

    /// The two-book catalog most tests start from.
    pub fn base_books() -> Vec<Book> {
        vec![
            Book::new(1, "Crime and Punishment", "Dostoevsky", 1866),
            Book::new(2, "War and Peace", "Tolstoy", 1869),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub books: Vec<Book>,
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
                books: Vec::new(),
            }
        }

        pub fn with_base_books(self) -> Self {
            self.with_books(base_books())
        }

        pub fn with_books(mut self, books: Vec<Book>) -> Self {
            self.store = InMemoryStore::with_books(books.clone());
            self.books = books;
            self
        }
    }
}
