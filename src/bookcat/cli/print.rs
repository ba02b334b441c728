use bookcat::api::{CmdMessage, MessageLevel};
use bookcat::model::{Book, Status};
use colored::*;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_MAX_WIDTH: usize = 40;
const AUTHOR_MAX_WIDTH: usize = 28;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Renders books as a table. Columns are sized by display width, so wide
/// and combining characters stay aligned.
pub fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                truncate_to_width(&b.title, TITLE_MAX_WIDTH),
                truncate_to_width(&b.author, AUTHOR_MAX_WIDTH),
                b.year.to_string(),
                b.status.to_string(),
            ]
        })
        .collect();

    let header = ["ID", "Title", "Author", "Year", "Status"];
    let mut widths = header.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header_line = format!(
        "{}  {}  {}  {}  {}",
        pad_left(header[0], widths[0]),
        pad_right(header[1], widths[1]),
        pad_right(header[2], widths[2]),
        pad_left(header[3], widths[3]),
        header[4],
    );
    writeln!(out, "{}", header_line.bold())?;

    for (row, book) in rows.iter().zip(books) {
        let status = match book.status {
            Status::Available => row[4].green(),
            Status::CheckedOut => row[4].yellow(),
        };
        writeln!(
            out,
            "{}  {}  {}  {}  {}",
            pad_left(&row[0], widths[0]),
            pad_right(&row[1], widths[1]),
            pad_right(&row[2], widths[2]),
            pad_left(&row[3], widths[3]),
            status,
        )?;
    }
    Ok(())
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
