// Engine module - Core aggregation logic (windowing, activity, counting)
// This layer sits between activity records (types) and whatever reporting
// layer consumes the counts

pub mod active;
pub mod aggregate;
pub mod window;

pub use active::{ActiveMode, is_active};
pub use aggregate::{MonthlyUsage, UsageQuery};
pub use window::{MonthWindow, filter_by_month};

use usagelens_types::{ActivityRecord, Result};

// Façade API - Stable public interface for callers
// Consumers should use this instead of directly accessing internal modules

/// Compute monthly logged-in users (MLU) and monthly active users (MAU)
/// for the window and activity definition described by `query`.
pub fn monthly_usage(records: &[ActivityRecord], query: &UsageQuery) -> Result<MonthlyUsage> {
    aggregate::calculate(records, query)
}
