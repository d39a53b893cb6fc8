//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application itself.
//! It is the only place that reads stdin, writes stdout/stderr or picks exit codes.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring (config, data file, logging) and dispatch
//! - `menu.rs`: the interactive numbered menu
//! - `render.rs`: messages and the book table

mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
