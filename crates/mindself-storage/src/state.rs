use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::slot::Slot;

/// Load a JSON value from a slot. An empty slot yields `T::default()`.
pub fn load_state<T: DeserializeOwned + Default>(
    slot: &impl Slot,
    key: &str,
) -> Result<T, StorageError> {
    match slot.read(key)? {
        Some(body) => {
            let value = serde_json::from_slice(&body)?;
            tracing::debug!(key, bytes = body.len(), "state loaded");
            Ok(value)
        }
        None => {
            tracing::debug!(key, "no existing state, starting fresh");
            Ok(T::default())
        }
    }
}

/// Save a JSON value to a slot, replacing what was there.
pub fn save_state<T: Serialize>(
    slot: &mut impl Slot,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    slot.write(key, &body)
}
