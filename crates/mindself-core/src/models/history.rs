use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One completed questionnaire, flattened for persistence.
///
/// `score` and `max_score` are the headline (standardized) values a front
/// end displays, e.g. the SDS index out of 100. `raw_score` keeps the
/// unstandardized item sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub scale_id: String,
    pub title: String,
    pub short_title: String,
    pub raw_score: u32,
    pub score: u32,
    pub max_score: u32,
    pub level: String,
    #[serde(default)]
    pub safety_flagged: bool,
    pub recorded_at: jiff::Timestamp,
}

impl HistoryRecord {
    /// Headline score as a fraction of its maximum, in percent.
    pub fn percent(&self) -> u32 {
        super::percent_of(self.score, self.max_score)
    }
}

/// Persisted shape of the history slot: scale id to records, newest first.
pub type HistoryLog = BTreeMap<String, Vec<HistoryRecord>>;

/// Parse a record id as typed by a user.
pub fn parse_record_id(input: &str) -> Result<Uuid, crate::error::CoreError> {
    Ok(Uuid::parse_str(input.trim())?)
}
