use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use tracing::{info, warn};

use super::helpers::position_of;

pub fn run<S: DataStore>(store: &mut S, books: &mut Vec<Book>, id: u64) -> Result<CmdResult> {
    let pos = position_of(books, id).inspect_err(|_| warn!(id, "delete: no such book"))?;
    let mut next = books.clone();
    let removed = next.remove(pos);
    store.save(&next)?;
    *books = next;
    info!(id, title = %removed.title, "book deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_books(vec![removed]))
}
