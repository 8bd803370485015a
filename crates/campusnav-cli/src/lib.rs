//! Campus navigation CLI library.
//!
//! Subcommand handlers and output helpers for the `campusnav` binary. The
//! binary only parses arguments, loads the dataset and dispatches here.

pub mod commands;
pub mod output;
