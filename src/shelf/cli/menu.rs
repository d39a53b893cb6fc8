//! # Interactive Menu
//!
//! The numbered console menu. Each choice prompts for its fields, calls one API
//! operation and prints the rendered result. Entering `0` at a field prompt cancels
//! the action; end of input leaves the menu as if `7` had been chosen.
//!
//! Reader and writer are generic so the loop can be driven from tests.

use super::render::render_result;
use shelf::api::ShelfApi;
use shelf::error::Result;
use shelf::store::CatalogStore;
use std::io::{BufRead, Write};

const CANCEL: &str = "0";

enum Reply<T> {
    Value(T),
    Cancelled,
    Closed,
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run<S: CatalogStore, R: BufRead, W: Write>(
    api: &ShelfApi<S>,
    input: R,
    output: W,
) -> Result<()> {
    Menu { api, input, output }.run()
}

struct Menu<'a, S: CatalogStore, R, W> {
    api: &'a ShelfApi<S>,
    input: R,
    output: W,
}

impl<S: CatalogStore, R: BufRead, W: Write> Menu<'_, S, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.display_main_menu()?;
            let Some(choice) = self.read_line("-> Choose a menu item: ")? else {
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.change_status()?,
                "3" => self.lend_book()?,
                "4" => self.delete_book()?,
                "5" => self.list_books()?,
                "6" => self.search_books()?,
                "7" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid input, choose a menu item from 1 to 7.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn display_main_menu(&mut self) -> Result<()> {
        let rule = "-".repeat(30);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Library catalog")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1. Add/update a book")?;
        writeln!(self.output, "2. Change a book's status")?;
        writeln!(self.output, "3. Lend a book")?;
        writeln!(self.output, "4. Delete a book")?;
        writeln!(self.output, "5. Show all books")?;
        writeln!(self.output, "6. Search by keyword")?;
        writeln!(self.output, "7. Exit\n")?;
        Ok(())
    }

    fn add_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nAdding/updating a book...")?;
        let fields = match self.ask_all(&["Title: ", "Author: ", "Year: "])? {
            Reply::Value(fields) => fields,
            Reply::Cancelled => return self.cancelled(),
            Reply::Closed => return Ok(Flow::Quit),
        };
        self.report(|api| api.add_update_book(&fields[0], &fields[1], &fields[2]))
    }

    fn change_status(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nChanging a book's status...")?;
        let fields = match self.ask_all(&["Book id: ", "New status: "])? {
            Reply::Value(fields) => fields,
            Reply::Cancelled => return self.cancelled(),
            Reply::Closed => return Ok(Flow::Quit),
        };
        self.report(|api| api.change_status_by_id(&fields[0], &fields[1]))
    }

    fn lend_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nLending a book...")?;
        let fields = match self.ask_all(&["Id of the book to lend: "])? {
            Reply::Value(fields) => fields,
            Reply::Cancelled => return self.cancelled(),
            Reply::Closed => return Ok(Flow::Quit),
        };
        self.report(|api| api.borrow_book(&fields[0]))
    }

    fn delete_book(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nDeleting a book...")?;
        let fields = match self.ask_all(&["Id of the book to delete: "])? {
            Reply::Value(fields) => fields,
            Reply::Cancelled => return self.cancelled(),
            Reply::Closed => return Ok(Flow::Quit),
        };
        self.report(|api| api.delete_book_by_id(&fields[0]))
    }

    fn list_books(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nBooks in the catalog:")?;
        self.report(|api| api.print_all_books_info())
    }

    fn search_books(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nSearching by keyword...")?;
        // No cancel here: "0" is a legitimate keyword (a count).
        let Some(keyword) = self.read_line("Keyword: ")? else {
            return Ok(Flow::Quit);
        };
        self.report(|api| api.find_all_by_keyword(&keyword))
    }

    /// Run one API call and print its result. Storage faults are shown, not fatal.
    fn report<F>(&mut self, call: F) -> Result<Flow>
    where
        F: FnOnce(&ShelfApi<S>) -> Result<shelf::api::CmdResult>,
    {
        match call(self.api) {
            Ok(result) => write!(self.output, "{}", render_result(&result))?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn cancelled(&mut self) -> Result<Flow> {
        writeln!(self.output, "Operation cancelled.\n")?;
        Ok(Flow::Continue)
    }

    /// Prompt for each label in turn, stopping at the first `0` or end of input.
    fn ask_all(&mut self, labels: &[&str]) -> Result<Reply<Vec<String>>> {
        writeln!(self.output, "Enter '{}' to cancel", CANCEL)?;
        let mut values = Vec::with_capacity(labels.len());
        for label in labels {
            match self.read_line(label)? {
                None => return Ok(Reply::Closed),
                Some(value) if value == CANCEL => return Ok(Reply::Cancelled),
                Some(value) => values.push(value),
            }
        }
        Ok(Reply::Value(values))
    }

    /// `None` at end of input. The trailing newline is stripped, nothing else.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::id::BookId;
    use shelf::store::memory::InMemoryStore;

    fn drive(api: &ShelfApi<InMemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        run(api, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_list_then_exit() {
        let api = ShelfApi::new(InMemoryStore::new());
        let out = drive(&api, "1\nTom Sawyer\nMark Twain\n1876\n5\n7\n");

        let id = BookId::derive("Mark Twain", "Tom Sawyer", "1876");
        assert!(out.contains(&format!("Book added with id {}.", id)));
        assert!(out.contains("Tom Sawyer"));
        assert_eq!(api.store().snapshot()[&id].count, 1);
    }

    #[test]
    fn zero_cancels_without_touching_the_catalog() {
        let api = ShelfApi::new(InMemoryStore::new());
        let out = drive(&api, "1\nTom Sawyer\n0\n7\n");
        assert!(out.contains("Operation cancelled."));
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn zero_cancels_status_change_at_the_status_prompt() {
        let api = ShelfApi::new(InMemoryStore::new());
        let out = drive(&api, "2\nabc\n0\n7\n");
        assert!(out.contains("Operation cancelled."));
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn invalid_choice_is_reported_and_loop_continues() {
        let api = ShelfApi::new(InMemoryStore::new());
        let out = drive(&api, "9\n7\n");
        assert!(out.contains("choose a menu item from 1 to 7"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let api = ShelfApi::new(InMemoryStore::new());
        drive(&api, "1\nDune\n");
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn storage_fault_is_printed_and_menu_continues() {
        let api = ShelfApi::new(InMemoryStore::new());
        api.store().set_simulate_write_error(true);
        let out = drive(&api, "1\nDune\nFrank Herbert\n1965\n7\n");
        assert!(out.contains("Error: "));
        assert!(out.matches("Library catalog").count() >= 2);
    }

    #[test]
    fn search_accepts_zero_as_keyword() {
        let api = ShelfApi::new(InMemoryStore::new());
        let out = drive(&api, "6\n0\n7\n");
        assert!(out.contains("Nothing found for '0'."));
    }
}
