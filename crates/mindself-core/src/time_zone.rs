use jiff::tz::TimeZone;

use crate::error::CoreError;

/// Resolve the time zone used to bucket records into calendar days.
///
/// `None` means the system time zone.
pub fn resolve(name: Option<&str>) -> Result<TimeZone, CoreError> {
    match name {
        None => Ok(TimeZone::system()),
        Some(name) => TimeZone::get(name).map_err(|e| CoreError::InvalidTimeZone {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}
