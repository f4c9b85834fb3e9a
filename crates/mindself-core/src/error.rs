use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid record id: {0}")]
    InvalidRecordId(#[from] uuid::Error),

    #[error("invalid time zone '{name}': {reason}")]
    InvalidTimeZone { name: String, reason: String },
}
