use crate::commands::{CmdMessage, CmdResult};
use crate::model::Book;

pub fn run(books: &[Book]) -> CmdResult {
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("Catalog is empty."));
    }
    result.with_listed_books(books.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::base_books;

    #[test]
    fn lists_in_catalog_order() {
        let result = run(&base_books());
        let ids: Vec<u64> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_reports_info() {
        let result = run(&[]);
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "Catalog is empty.");
    }
}
