use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::{generate_id, DataStore};
use tracing::info;

use super::helpers::required_text;

pub fn run<S: DataStore>(
    store: &mut S,
    books: &mut Vec<Book>,
    title: &str,
    author: &str,
    year: i32,
) -> Result<CmdResult> {
    let title = required_text("Title", title)?;
    let author = required_text("Author", author)?;

    let book = Book::new(generate_id(books)?, title, author, year);
    let mut next = books.clone();
    next.push(book.clone());
    store.save(&next)?;
    *books = next;
    info!(id = book.id, title = %book.title, "book added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added with id {}: {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::error::CatalogError;
    use crate::model::Status;
    use crate::store::memory::fixtures::{base_books, FailingStore, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_with_next_id() {
        let StoreFixture {
            mut store,
            mut books,
        } = StoreFixture::new().with_base_books();

        let result = run(
            &mut store,
            &mut books,
            "Master and Margarita",
            "Bulgakov",
            1940,
        )
        .unwrap();

        assert_eq!(books.len(), 3);
        let last = books.last().unwrap();
        assert_eq!(last.id, 3);
        assert_eq!(last.status, Status::Available);
        assert_eq!(result.affected_books[0].id, 3);
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn first_book_gets_id_one() {
        let mut store = InMemoryStore::new();
        let mut books = Vec::new();
        run(&mut store, &mut books, "Dune", "Herbert", 1965).unwrap();
        assert_eq!(books[0].id, 1);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn ids_stay_unique_across_adds_and_deletes() {
        let mut store = InMemoryStore::new();
        let mut books = Vec::new();
        for i in 0..5 {
            run(&mut store, &mut books, &format!("B{}", i), "A", 2000 + i).unwrap();
        }
        delete::run(&mut store, &mut books, 2).unwrap();
        delete::run(&mut store, &mut books, 5).unwrap();
        run(&mut store, &mut books, "Late", "A", 2020).unwrap();
        run(&mut store, &mut books, "Later", "A", 2021).unwrap();

        let mut ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
        assert_eq!(books.last().unwrap().id, 6);
    }

    #[test]
    fn rejects_blank_title_without_saving() {
        let StoreFixture {
            mut store,
            mut books,
        } = StoreFixture::new().with_base_books();

        let err = run(&mut store, &mut books, "  ", "Bulgakov", 1940).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
        assert_eq!(books.len(), 2);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn failed_save_keeps_catalog_as_it_was() {
        let mut store = FailingStore::with_books(base_books());
        let mut books = base_books();

        let err = run(&mut store, &mut books, "Dune", "Herbert", 1965).unwrap_err();

        assert!(matches!(err, CatalogError::Io(_)));
        assert_eq!(books, base_books());
    }

    #[test]
    fn exhausted_ids_refuse_to_add() {
        let mut store = InMemoryStore::new();
        let mut books = vec![Book::new(u64::MAX, "Last", "A", 2000)];

        let err = run(&mut store, &mut books, "Dune", "Herbert", 1965).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidInput(_)));
        assert_eq!(books.len(), 1);
        assert_eq!(store.saves(), 0);
    }
}
