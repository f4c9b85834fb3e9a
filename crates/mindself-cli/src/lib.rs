//! mindself-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! commands with in-memory input, output and history.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod state;
