//! # Shelf CLI
//!
//! The binary is intentionally thin: the client lives in `cli/` and this file only
//! invokes `cli::run()` and handles process termination. Operator-facing outcomes
//! (unknown id, out of stock, ...) exit 0; storage and config faults exit 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
