use crate::error::{CatalogError, Result};
use crate::model::Book;

pub fn position_of(books: &[Book], id: u64) -> Result<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or(CatalogError::NotFound(id))
}

/// Trims `value` and rejects it if nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_position_by_id() {
        let books = vec![Book::new(4, "A", "A", 1), Book::new(9, "B", "B", 2)];
        assert_eq!(position_of(&books, 9).unwrap(), 1);
        assert!(matches!(
            position_of(&books, 5),
            Err(CatalogError::NotFound(5))
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(required_text("Title", "  Dune ").unwrap(), "Dune");
        assert!(matches!(
            required_text("Title", "   "),
            Err(CatalogError::InvalidInput(_))
        ));
    }
}
