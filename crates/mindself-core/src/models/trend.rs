use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::history::HistoryRecord;

/// A single point of a per-scale trend series, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub recorded_at: jiff::Timestamp,
    pub score: u32,
    pub max_score: u32,
    pub level: String,
}

impl TrendPoint {
    pub fn percent(&self) -> u32 {
        super::percent_of(self.score, self.max_score)
    }
}

impl From<&HistoryRecord> for TrendPoint {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            recorded_at: record.recorded_at,
            score: record.score,
            max_score: record.max_score,
            level: record.level.clone(),
        }
    }
}

/// Summary numbers shown above the scale list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryStats {
    pub total_records: usize,
    pub scales_taken: usize,
    /// Consecutive calendar days, ending today, with at least one record.
    pub streak_days: u32,
}
