use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Console library-catalog manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book, or one more copy of a book already catalogued
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        year: String,
    },

    /// Set a book's status ("in stock" or "not in stock")
    Status { id: String, status: String },

    /// Lend one copy of a book
    #[command(alias = "borrow")]
    Lend { id: String },

    /// Delete a book from the catalog
    #[command(alias = "rm")]
    Delete { id: String },

    /// List every book
    #[command(alias = "ls")]
    List,

    /// Find books whose id or any field equals the keyword
    Search { keyword: String },

    /// Interactive menu (the default when no command is given)
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
