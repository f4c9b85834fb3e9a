use jiff::civil::Date;
use jiff::tz::TimeZone;
use uuid::Uuid;

use mindself_core::models::history::{HistoryLog, HistoryRecord};
use mindself_core::models::trend::{HistoryStats, TrendPoint};
use mindself_core::slot_keys;

use crate::error::StorageError;
use crate::slot::Slot;
use crate::state::{load_state, save_state};
use crate::stats;

/// Records kept per scale unless configured otherwise.
pub const DEFAULT_RETENTION: usize = 20;

/// Append-only, per-scale capped result log.
///
/// Every operation reads the whole slot, changes it and writes it back.
/// Per scale, records are kept newest first and the oldest are evicted
/// once `retention` is exceeded.
#[derive(Debug)]
pub struct HistoryStore<S: Slot> {
    slot: S,
    retention: usize,
}

impl<S: Slot> HistoryStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_retention(slot, DEFAULT_RETENTION)
    }

    /// A retention of zero is treated as one.
    pub fn with_retention(slot: S, retention: usize) -> Self {
        Self {
            slot,
            retention: retention.max(1),
        }
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Give back the underlying slot, e.g. to reopen it with another cap.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Load the log with the retention cap applied, so records beyond a
    /// lowered cap are never reported and are dropped on the next save.
    fn load(&self) -> Result<HistoryLog, StorageError> {
        let mut log: HistoryLog = load_state(&self.slot, slot_keys::HISTORY)?;
        for records in log.values_mut() {
            records.truncate(self.retention);
        }
        Ok(log)
    }

    fn save(&mut self, log: &HistoryLog) -> Result<(), StorageError> {
        save_state(&mut self.slot, slot_keys::HISTORY, log)
    }

    /// Add a record in front of its scale's log. Appending the same record
    /// twice stores it twice.
    pub fn append(&mut self, record: HistoryRecord) -> Result<(), StorageError> {
        let mut log = self.load()?;
        let scale_id = record.scale_id.clone();
        let records = log.entry(scale_id.clone()).or_default();
        records.insert(0, record);

        let evicted = records.len().saturating_sub(self.retention);
        records.truncate(self.retention);
        self.save(&log)?;

        tracing::info!(scale_id = %scale_id, evicted, "history record appended");
        Ok(())
    }

    /// Records newest first, for one scale or for all of them.
    pub fn list(&self, scale_id: Option<&str>) -> Result<Vec<HistoryRecord>, StorageError> {
        let mut log = self.load()?;
        match scale_id {
            Some(id) => Ok(log.remove(id).unwrap_or_default()),
            None => {
                let mut all: Vec<HistoryRecord> = log.into_values().flatten().collect();
                all.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
                Ok(all)
            }
        }
    }

    /// Delete one record by id.
    pub fn remove(&mut self, id: Uuid) -> Result<HistoryRecord, StorageError> {
        let mut log = self.load()?;

        let mut removed = None;
        for records in log.values_mut() {
            if let Some(pos) = records.iter().position(|r| r.id == id) {
                removed = Some(records.remove(pos));
                break;
            }
        }
        let removed = removed.ok_or_else(|| StorageError::NotFound { id: id.to_string() })?;

        log.retain(|_, records| !records.is_empty());
        self.save(&log)?;
        tracing::info!(scale_id = %removed.scale_id, %id, "history record removed");
        Ok(removed)
    }

    /// Drop every record of every scale.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.remove(slot_keys::HISTORY)?;
        tracing::info!("history cleared");
        Ok(())
    }

    /// Score series for one scale, oldest first.
    pub fn trend(&self, scale_id: &str) -> Result<Vec<TrendPoint>, StorageError> {
        let records = self.list(Some(scale_id))?;
        Ok(records.iter().rev().map(TrendPoint::from).collect())
    }

    pub fn stats(&self, today: Date, tz: &TimeZone) -> Result<HistoryStats, StorageError> {
        let log = self.load()?;
        Ok(stats::summarize(&log, today, tz))
    }
}
