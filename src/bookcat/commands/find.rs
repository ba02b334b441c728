use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "year" => Ok(SearchField::Year),
            other => Err(CatalogError::InvalidInput(format!(
                "Unknown search field: {}",
                other
            ))),
        }
    }
}

/// Linear scan in catalog order. Text fields match case-insensitive
/// substrings; year must parse and match exactly.
pub fn run(books: &[Book], field: SearchField, query: &str) -> Result<CmdResult> {
    let matches: Vec<Book> = match field {
        SearchField::Title | SearchField::Author => {
            let needle = query.to_lowercase();
            books
                .iter()
                .filter(|b| {
                    let haystack = match field {
                        SearchField::Title => &b.title,
                        _ => &b.author,
                    };
                    haystack.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        }
        SearchField::Year => {
            let year = parse_year(query)?;
            books.iter().filter(|b| b.year == year).cloned().collect()
        }
    };

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(matches))
}

pub fn parse_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidInput(format!("Year must be a number, got '{}'", raw)))
}
