pub mod history;
pub mod trend;

/// `score` out of `max` as a rounded percentage; zero when `max` is zero.
pub(crate) fn percent_of(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (score * 100 + max / 2) / max
}
