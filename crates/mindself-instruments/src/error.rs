use thiserror::Error;

use crate::scoring::DefinitionError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown scale category: {0}")]
    UnknownCategory(String),

    #[error("{scale_id}: expected {expected} answers, got {actual}")]
    InvalidAnswerCount {
        scale_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{scale_id}: answer {value} to question {} is not one of the {option_count} options", .index + 1)]
    InvalidAnswerValue {
        scale_id: String,
        index: usize,
        value: u32,
        option_count: usize,
    },

    #[error("invalid scale definition: {0}")]
    Definition(#[from] DefinitionError),
}
