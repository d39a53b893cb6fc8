//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library-catalog engine** with a small console client on top.
//! The catalog rules live in the library; the binary only prompts, dispatches and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, table rendering           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store handle         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Catalog rules: ids, add/update, lend, status, search     │
//! │  - One load, one mutation, one save per call                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reports, Not Faults
//!
//! Operator mistakes (unknown id, unsupported status, empty keyword, lending a book
//! with no copies left) are ordinary outcomes: commands return `Ok(CmdResult)` with an
//! [`commands::Outcome`] describing what happened. Only storage faults come back as
//! [`error::ShelfError`].
//!
//! ## Known Limitation
//!
//! Every mutating call rewrites the whole data file and nothing locks it. Two shelf
//! processes working on the same file race and the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `Status`, `Catalog`
//! - [`id`]: Deterministic book identifiers
//! - [`config`]: Persisted client configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
