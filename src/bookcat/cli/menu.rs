use super::print::{print_books, print_messages};
use bookcat::api::{CatalogApi, CmdMessage, CmdResult};
use bookcat::commands::find::SearchField;
use bookcat::error::Result;
use bookcat::store::DataStore;
use std::io::{BufRead, Write};

const MENU: &str = "\
Library catalog:
1. Add a book
2. Delete a book
3. Search books
4. List all books
5. Change book status
6. Exit";

const SEARCH_MENU: &str = "\
Search by:
1. Title
2. Author
3. Year";

/// Interactive session over arbitrary input/output, so it can run against
/// stdin/stdout or a test buffer. Ends on "6" or end of input.
pub struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut CatalogApi<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut CatalogApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };

            let outcome = match choice.trim() {
                "1" => self.add(),
                "2" => self.delete(),
                "3" => self.search(),
                "4" => Ok(Some(self.api.list_books())),
                "5" => self.change_status(),
                "6" => {
                    writeln!(self.out, "Goodbye.")?;
                    break;
                }
                _ => Ok(Some(error_result("Invalid choice. Try again."))),
            };

            match outcome {
                Ok(Some(result)) => {
                    print_books(&mut self.out, &result.listed_books)?;
                    print_messages(&mut self.out, &result.messages)?;
                }
                // Input ran out mid-action
                Ok(None) => break,
                Err(e) => print_messages(&mut self.out, &[CmdMessage::error(e.to_string())])?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<Option<CmdResult>> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(None);
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(None);
        };
        self.api.add_book(&title, &author, &year).map(Some)
    }

    fn delete(&mut self) -> Result<Option<CmdResult>> {
        let Some(id) = self.prompt("ID of the book to delete: ")? else {
            return Ok(None);
        };
        self.api.delete_book(&id).map(Some)
    }

    fn search(&mut self) -> Result<Option<CmdResult>> {
        writeln!(self.out, "{}", SEARCH_MENU)?;
        let Some(choice) = self.prompt("Choose a field: ")? else {
            return Ok(None);
        };
        let field = match choice.trim() {
            "1" => SearchField::Title,
            "2" => SearchField::Author,
            "3" => SearchField::Year,
            other => match other.parse() {
                Ok(field) => field,
                Err(_) => return Ok(Some(error_result("Invalid choice."))),
            },
        };
        let Some(query) = self.prompt(&format!("Search {}: ", field))? else {
            return Ok(None);
        };
        self.api.find_books(field, &query).map(Some)
    }

    fn change_status(&mut self) -> Result<Option<CmdResult>> {
        let Some(id) = self.prompt("ID of the book: ")? else {
            return Ok(None);
        };
        let Some(status) = self.prompt("New status ('available' or 'checked-out'): ")? else {
            return Ok(None);
        };
        self.api.update_status(&id, &status).map(Some)
    }

    /// Prints `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn error_result(content: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(content));
    result
}
