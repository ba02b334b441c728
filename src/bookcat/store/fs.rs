use super::DataStore;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "library.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file missing, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        let books: Vec<Book> = serde_json::from_str(&content).map_err(CatalogError::Parse)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(books).map_err(CatalogError::Parse)?;
        fs::write(&self.path, content).map_err(CatalogError::Io)?;
        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use tempfile::tempdir;

    fn base_books() -> Vec<Book> {
        vec![
            Book::new(1, "Преступление и наказание", "Фёдор Достоевский", 1866),
            Book::new(2, "Война и мир", "Лев Толстой", 1869),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("library.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("library.json"));
        let mut books = base_books();
        books[1].status = Status::CheckedOut;

        store.save(&books).unwrap();
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn writes_non_ascii_literally() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        let mut store = FileStore::new(&path);
        store.save(&base_books()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Война и мир"));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains('\n'));
    }

    #[test]
    fn save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("library.json"));
        store.save(&base_books()).unwrap();
        store.save(&base_books()[1..]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn creates_missing_parent_dir() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("library.json"));
        store.save(&base_books()).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(CatalogError::Parse(_))));
    }
}
