//! Domain models for usage reporting periods.

mod usage;

pub use usage::{Granularity, ModelBreakdown, ModelFamily, UsageEntry};
