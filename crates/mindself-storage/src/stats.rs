use std::collections::BTreeSet;

use jiff::civil::Date;
use jiff::tz::TimeZone;

use mindself_core::models::history::{HistoryLog, HistoryRecord};
use mindself_core::models::trend::HistoryStats;

pub fn summarize(log: &HistoryLog, today: Date, tz: &TimeZone) -> HistoryStats {
    let records: Vec<&HistoryRecord> = log.values().flatten().collect();
    HistoryStats {
        total_records: records.len(),
        scales_taken: log.values().filter(|r| !r.is_empty()).count(),
        streak_days: streak_days(records.iter().copied(), today, tz),
    }
}

/// Consecutive calendar days, ending with `today`, that have at least one
/// record. Zero when nothing was recorded today.
pub fn streak_days<'a>(
    records: impl IntoIterator<Item = &'a HistoryRecord>,
    today: Date,
    tz: &TimeZone,
) -> u32 {
    let days: BTreeSet<Date> = records
        .into_iter()
        .map(|r| r.recorded_at.to_zoned(tz.clone()).date())
        .collect();

    let mut streak = 0;
    let mut expected = today;
    for day in days.iter().rev().skip_while(|d| **d > today) {
        if *day != expected {
            break;
        }
        streak += 1;
        expected = match expected.yesterday() {
            Ok(date) => date,
            Err(_) => break,
        };
    }
    streak
}
