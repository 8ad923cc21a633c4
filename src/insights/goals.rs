//! Goal progress and contribution metrics
//!
//! Derives display metrics from a goal's raw fields. All functions are pure;
//! the current date is always an explicit parameter so call sites stay
//! deterministic under test.

use chrono::{Datelike, NaiveDate};

use crate::models::Money;

/// Percentage of a goal's target that has been saved, clamped to [0, 100]
///
/// A zero or negative target yields 0 rather than an error: malformed input
/// flows through as "no progress". Negative saved amounts clamp to 0 the
/// same way.
pub fn progress_percentage(current: Money, target: Money) -> f64 {
    if target.cents() <= 0 {
        return 0.0;
    }
    let percentage = current.cents() as f64 / target.cents() as f64 * 100.0;
    percentage.clamp(0.0, 100.0)
}

/// Whole calendar months from `start` to `end`, ignoring day-of-month
///
/// `(end.year - start.year) * 12 + (end.month - start.month)`. Negative when
/// `end` is in an earlier month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// The amount to save per remaining month to meet the target by the deadline
///
/// Rules, in order:
/// - Goal already met or overfunded: zero, regardless of dates.
/// - Deadline today or in the past: the full remainder is due now.
/// - Deadline later in the current calendar month (month difference of
///   zero): also the full remainder, never a division by a clamped count.
/// - Otherwise the remainder divided evenly over the months left, to the
///   nearest cent.
///
/// The month count deliberately ignores day-of-month; a deadline on the 1st
/// and the 28th of the same month suggest the same contribution.
pub fn suggested_monthly_contribution(
    current: Money,
    target: Money,
    deadline: NaiveDate,
    today: NaiveDate,
) -> Money {
    let remaining = target - current;
    if !remaining.is_positive() {
        return Money::zero();
    }

    if deadline <= today {
        return remaining;
    }

    let months_left = months_between(today, deadline);
    if months_left <= 0 {
        return remaining;
    }

    remaining.div_round(months_left as i64)
}
