//! Key-value slot conventions.
//!
//! Pure string functions. These define the names under which MindSelf
//! persists state in a key-value slot (a browser local-storage key, or a
//! JSON file of the same name in the data directory).

/// The single slot holding every scale's history log.
pub const HISTORY: &str = "mindself_history";

/// File name used when a slot is backed by a file on disk.
pub fn slot_file(key: &str) -> String {
    format!("{key}.json")
}

/// Temporary file written before an atomic rename over [`slot_file`].
pub fn slot_tmp_file(key: &str) -> String {
    format!("{key}.json.tmp")
}
