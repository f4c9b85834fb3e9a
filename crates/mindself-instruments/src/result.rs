use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use mindself_core::models::history::HistoryRecord;

use crate::scoring::{AdvicePriority, FollowUp, ScaleDefinition, SeverityBand};

/// Score of one subscale (or of the whole instrument).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub subscale_id: String,
    pub name: String,
    pub raw: u32,
    pub standardized: u32,
    /// Lowest standardized score this subscale can take.
    pub min: u32,
    /// Highest standardized score this subscale can take.
    pub max: u32,
    pub band: SeverityBand,
}

/// How a single answer was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemScore {
    pub index: usize,
    /// Option index as answered.
    pub answer: u32,
    /// Point value of that option.
    pub value: u32,
    /// What the item added to its subscales after reversal.
    pub contribution: u32,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Advice {
    pub priority: AdvicePriority,
    /// `None` for advice that applies to the whole result.
    pub subscale_id: Option<String>,
    pub text: String,
}

/// Raised for every subscale classified in a high-priority band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAlert {
    pub subscale_id: String,
    pub level: String,
    pub message: String,
}

/// Output of one scoring call. Transient: front ends display it and keep
/// only its [`HistoryRecord`] projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub scale_id: String,
    pub total: SubscaleScore,
    pub subscales: Vec<SubscaleScore>,
    pub items: Vec<ItemScore>,
    pub safety_flag: Option<String>,
    /// Another scale worth taking given this total.
    pub follow_up: Option<FollowUp>,
    pub advice: Vec<Advice>,
    pub alerts: Vec<RiskAlert>,
}

impl ScoreResult {
    /// The total followed by every named subscale.
    pub fn all_subscales(&self) -> impl Iterator<Item = &SubscaleScore> {
        std::iter::once(&self.total).chain(self.subscales.iter())
    }

    pub fn subscale(&self, id: &str) -> Option<&SubscaleScore> {
        self.all_subscales().find(|s| s.subscale_id == id)
    }

    /// Raw sums keyed by subscale id, `"total"` included.
    pub fn raw_scores(&self) -> BTreeMap<String, u32> {
        self.all_subscales()
            .map(|s| (s.subscale_id.clone(), s.raw))
            .collect()
    }

    pub fn standardized_scores(&self) -> BTreeMap<String, u32> {
        self.all_subscales()
            .map(|s| (s.subscale_id.clone(), s.standardized))
            .collect()
    }

    /// Matched severity band keyed by subscale id.
    pub fn severity(&self) -> BTreeMap<String, &SeverityBand> {
        self.all_subscales()
            .map(|s| (s.subscale_id.clone(), &s.band))
            .collect()
    }

    /// Flatten into the record the history store keeps.
    pub fn to_history_record(
        &self,
        definition: &ScaleDefinition,
        recorded_at: jiff::Timestamp,
    ) -> HistoryRecord {
        HistoryRecord {
            id: Uuid::new_v4(),
            scale_id: self.scale_id.clone(),
            title: definition.title.clone(),
            short_title: definition.short_title.clone(),
            raw_score: self.total.raw,
            score: self.total.standardized,
            max_score: self.total.max,
            level: self.total.band.level.clone(),
            safety_flagged: self.safety_flag.is_some(),
            recorded_at,
        }
    }
}
