pub mod dass21;
pub mod gad7;
pub mod phq9;
pub mod psqi;
pub mod pss10;
pub mod rses;
pub mod sas;
pub mod sds;
pub mod who5;

use crate::scoring::{ResponseOption, options};

/// "Not at all" to "nearly every day", scored 0-3. Shared by the PHQ and
/// GAD families.
pub(crate) fn two_week_frequency() -> Vec<ResponseOption> {
    options(&[
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ])
}

/// Zung four-point frequency, scored 1-4.
pub(crate) fn zung_frequency() -> Vec<ResponseOption> {
    options(&[
        (1, "A little of the time"),
        (2, "Some of the time"),
        (3, "Good part of the time"),
        (4, "Most of the time"),
    ])
}
