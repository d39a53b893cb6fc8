//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text: leveled messages, then the book table
//! for listings. Layout math is done on display width, not bytes or chars, so
//! Cyrillic and CJK titles keep the columns aligned.

use colored::Colorize;
use shelf::api::{CmdMessage, CmdResult, ListedBook, MessageLevel, Outcome};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column headings and their widths, in display cells.
const COLUMNS: [(&str, usize); 6] = [
    ("id", 16),
    ("title", 30),
    ("author", 20),
    ("year", 10),
    ("count", 6),
    ("status", 15),
];

pub fn render_result(result: &CmdResult) -> String {
    let mut out = render_messages(&result.messages);
    if result.outcome == Outcome::Listing {
        out.push_str(&render_book_table(&result.listed_books));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// Header, separator, then one row per book.
pub fn render_book_table(books: &[ListedBook]) -> String {
    let header: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    let mut out = table_row(&header);
    out.push_str(&format!("|{}|\n", "-".repeat(inner_width())));

    for entry in books {
        let book = &entry.book;
        let cells = [
            entry.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.year.clone(),
            book.count.to_string(),
            book.status.to_string(),
        ];
        out.push_str(&table_row(&cells));
    }
    out
}

fn table_row(cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| center(cell, *width))
        .collect();
    format!("| {} |\n", padded.join(" | "))
}

/// Width between the outer pipes.
fn inner_width() -> usize {
    let cells: usize = COLUMNS.iter().map(|(_, w)| w).sum();
    cells + 3 * (COLUMNS.len() - 1) + 2
}

/// Centre `s` in `width` cells; odd padding goes to the right.
fn center(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
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
