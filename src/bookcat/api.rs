//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for catalog operations. It owns the
//! storage backend and the in-memory collection loaded from it, so callers
//! never pass the collection around themselves.
//!
//! The facade takes raw operator text (ids, years, statuses, search fields),
//! turns it into typed arguments and dispatches to `commands/*.rs`. Parsing
//! failures surface as [`CatalogError::InvalidInput`] before any command runs,
//! which means nothing is mutated or saved.
//!
//! It does no I/O of its own beyond what the store does, and it never prints.

use crate::commands::{self, find::SearchField};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use crate::store::DataStore;

pub struct CatalogApi<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> CatalogApi<S> {
    /// Loads the current record set from `store`. A malformed backing file
    /// fails here.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        Ok(Self { store, books })
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: &str,
    ) -> Result<commands::CmdResult> {
        let year = commands::find::parse_year(year)?;
        commands::add::run(&mut self.store, &mut self.books, title, author, year)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, &mut self.books, id)
    }

    pub fn find_books(&self, field: SearchField, query: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.books, field, query)
    }

    pub fn update_status(&mut self, id: &str, status: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::status::run(&mut self.store, &mut self.books, id, status)
    }

    pub fn list_books(&self) -> commands::CmdResult {
        commands::list::run(&self.books)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidInput(format!("ID must be a number, got '{}'", raw)))
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
