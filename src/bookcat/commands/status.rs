use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Status};
use crate::store::DataStore;
use tracing::{info, warn};

use super::helpers::position_of;

/// Sets the status label of one book. The id is resolved before the status
/// text is checked, so an unknown id reports not-found even with a bad status.
pub fn run<S: DataStore>(
    store: &mut S,
    books: &mut [Book],
    id: u64,
    new_status: &str,
) -> Result<CmdResult> {
    let pos = position_of(books, id).inspect_err(|_| warn!(id, "status: no such book"))?;
    let status: Status = new_status
        .parse()
        .inspect_err(|_| warn!(id, status = new_status, "status: rejected value"))?;

    let mut result = CmdResult::default();
    if books[pos].status == status {
        result.add_message(CmdMessage::warning(format!(
            "Book {} is already '{}'",
            id, status
        )));
    }

    let mut next = books.to_vec();
    next[pos].status = status;
    store.save(&next)?;
    books[pos].status = status;
    info!(id, %status, "status changed");

    result.add_message(CmdMessage::success(format!(
        "Status of book {} set to '{}'",
        id, status
    )));
    Ok(result.with_affected_books(vec![books[pos].clone()]))
}
