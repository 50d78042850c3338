use chrono::{DateTime, Datelike, Utc};
use usagelens_types::{ActivityRecord, Error, Result};

/// A calendar (month, year) window. Months are 0-indexed, January = 0,
/// matching the upstream record supplier's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    month: u32,
    year: i32,
}

impl MonthWindow {
    /// Build a window, rejecting months outside `0..=11`. Validation
    /// happens once here so the filter and aggregator never re-check.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if month > 11 {
            return Err(Error::MonthOutOfRange(month));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether a timestamp falls inside this calendar window. Month and
    /// year are read straight off the timestamp; no timezone
    /// normalization is applied.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts.month0() == self.month && ts.year() == self.year
    }
}

/// Select the records relevant to a calendar window.
///
/// A record matches when its `logged_in_at` falls inside the window.
/// With `include_last_seen`, a record also matches when ANY heartbeat
/// falls inside the window, covering sessions that started in a prior
/// month but carried activity into the target month.
///
/// Input order is preserved and no deduplication happens here: a user
/// with several sessions appears once per matching record.
pub fn filter_by_month(
    records: &[ActivityRecord],
    window: MonthWindow,
    include_last_seen: bool,
) -> Vec<&ActivityRecord> {
    records
        .iter()
        .filter(|record| {
            window.contains(record.logged_in_at)
                || (include_last_seen
                    && record.last_seen_at.iter().any(|&ts| window.contains(ts)))
        })
        .collect()
}
