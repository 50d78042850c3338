use serde::{Deserialize, Serialize};
use usagelens_types::ActivityRecord;

/// Which definition of "active" the aggregator applies when counting MAU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveMode {
    /// Any heartbeat at all counts the user as active (no threshold).
    LastSeenActivity,
    /// Cumulative inter-heartbeat time must reach a threshold.
    TimeBasedActivity,
}

impl Default for ActiveMode {
    fn default() -> Self {
        Self::LastSeenActivity
    }
}

/// Time-based activity predicate.
///
/// Active time is the sum of successive gaps between consecutive sorted
/// heartbeats, `Σ (t[i] - t[i-1])` - a cumulative-gap metric, not the
/// first-to-last span. With fewer than two heartbeats there is no
/// interval to measure and the record is not active regardless of
/// threshold.
///
/// Heartbeats are copied before sorting; the caller's record is never
/// mutated.
pub fn is_active(record: &ActivityRecord, threshold_ms: i64) -> bool {
    if record.last_seen_at.len() < 2 {
        return false;
    }

    let mut seen = record.last_seen_at.clone();
    seen.sort_unstable();

    let total_ms: i64 = seen
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_milliseconds())
        .sum();

    total_ms >= threshold_ms
}
