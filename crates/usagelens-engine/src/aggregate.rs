use std::collections::HashSet;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use usagelens_types::{ActivityRecord, Result, UserId};

use crate::active::{ActiveMode, is_active};
use crate::window::{MonthWindow, filter_by_month};

/// Parameters for one monthly usage calculation.
///
/// Replaces the upstream service's optional trailing arguments with an
/// explicit structure; defaults resolve once at the start of the
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageQuery {
    /// Target month, 0-indexed (January = 0).
    pub month: u32,
    /// Target year; `None` resolves to the current calendar year.
    pub year: Option<i32>,
    /// Minimum cumulative active time in milliseconds for
    /// [`ActiveMode::TimeBasedActivity`]. Ignored in the default mode.
    pub active_threshold_ms: i64,
    /// Definition of "active" used for the MAU count.
    pub active_mode: ActiveMode,
}

impl UsageQuery {
    /// Query for a month of the current year with the documented
    /// defaults: threshold 0 ms, last-seen activity mode.
    pub fn for_month(month: u32) -> Self {
        Self {
            month,
            year: None,
            active_threshold_ms: 0,
            active_mode: ActiveMode::default(),
        }
    }
}

/// The two monthly counts. Serializes as `{"MLU": .., "MAU": ..}` to
/// match the upstream reporting shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyUsage {
    /// Monthly logged-in users: distinct users whose login fell in the
    /// target month.
    #[serde(rename = "MLU")]
    pub mlu: usize,
    /// Monthly active users: distinct users whose session activity in
    /// the target month satisfied the active predicate.
    #[serde(rename = "MAU")]
    pub mau: usize,
}

/// Compute MLU and MAU for the batch.
///
/// MLU windows on login time only. MAU windows with heartbeat
/// carry-over (`include_last_seen`), so a user who logged in outside
/// the month but had heartbeats inside it can count as active - MAU is
/// therefore not bounded by MLU. The asymmetry is deliberate and
/// matches the upstream service.
pub fn calculate(records: &[ActivityRecord], query: &UsageQuery) -> Result<MonthlyUsage> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let window = MonthWindow::new(query.month, year)?;

    let mut logged_in: HashSet<&UserId> = HashSet::new();
    for record in filter_by_month(records, window, false) {
        logged_in.insert(&record.user_id);
    }

    let mut active: HashSet<&UserId> = HashSet::new();
    for record in filter_by_month(records, window, true) {
        let counts = match query.active_mode {
            ActiveMode::LastSeenActivity => !record.last_seen_at.is_empty(),
            ActiveMode::TimeBasedActivity => is_active(record, query.active_threshold_ms),
        };
        if counts {
            active.insert(&record.user_id);
        }
    }

    Ok(MonthlyUsage {
        mlu: logged_in.len(),
        mau: active.len(),
    })
}
