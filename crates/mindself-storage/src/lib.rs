//! mindself-storage
//!
//! Local result history. Everything lives in one key-value slot, the way a
//! browser keeps it in local storage; the slot can be a file on disk or an
//! in-memory map.

pub mod error;
pub mod history;
pub mod slot;
pub mod state;
pub mod stats;
