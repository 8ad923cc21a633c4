//! Derived metrics over stored records
//!
//! Pure calculation functions the rest of the application renders from:
//! goal progress and suggested contributions, and transaction aggregation
//! for summaries and charts. Nothing in this module performs I/O or touches
//! storage; records arrive as arguments and results are freshly allocated.

pub mod goals;
pub mod spending;

pub use goals::{months_between, progress_percentage, suggested_monthly_contribution};
pub use spending::{group_by_category, group_by_period, totals, PeriodBucket, PeriodMode, Totals};
