use jiff::tz::TimeZone;

use mindself_core::time_zone;
use mindself_storage::history::HistoryStore;
use mindself_storage::slot::{FileSlot, Slot};

use crate::config::MindselfConfig;

/// Everything a command needs: the loaded config, the history store it
/// points at, and the zone that decides calendar days.
pub struct AppState<S: Slot> {
    pub config: MindselfConfig,
    pub history: HistoryStore<S>,
    pub time_zone: TimeZone,
}

impl<S: Slot> AppState<S> {
    pub fn new(config: MindselfConfig, slot: S) -> eyre::Result<Self> {
        let time_zone = time_zone::resolve(config.time_zone.as_deref())?;
        let history = HistoryStore::with_retention(slot, config.history_retention);
        Ok(Self {
            config,
            history,
            time_zone,
        })
    }

    /// Today's date in the configured zone.
    pub fn today(&self) -> jiff::civil::Date {
        jiff::Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }
}

impl AppState<FileSlot> {
    /// State backed by the history file in the configured data directory.
    pub fn open(config: MindselfConfig) -> eyre::Result<Self> {
        let dir = config.resolved_data_dir()?;
        tracing::debug!(dir = %dir.display(), "opening history");
        Self::new(config, FileSlot::new(dir))
    }
}
