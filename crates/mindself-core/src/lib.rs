//! mindself-core
//!
//! Pure domain types shared by the scoring engine, the history store and
//! the front ends. No I/O here; this is the shared vocabulary of MindSelf.

pub mod error;
pub mod models;
pub mod slot_keys;
pub mod time_zone;
