//! Trip date-range rules
//!
//! Start and end date must be given together; when neither is given the
//! trip defaults to starting today and spanning [`DEFAULT_TRIP_SPAN_DAYS`].
//! `today` is an argument so callers own the clock and tests stay
//! deterministic.

use chrono::{Duration, NaiveDate};

use crate::error::{ItineraryError, Result};
use crate::models::DateRange;

/// Span applied when the user saves without picking dates.
pub const DEFAULT_TRIP_SPAN_DAYS: i64 = 15;

pub fn resolve_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateRange> {
    match (start, end) {
        (Some(_), None) => Err(ItineraryError::MissingEndDate),
        (None, Some(_)) => Err(ItineraryError::MissingStartDate),
        (Some(start), Some(end)) if end < start => {
            Err(ItineraryError::EndBeforeStart { start, end })
        }
        (Some(start), Some(end)) => Ok(DateRange {
            start_date: start,
            end_date: end,
        }),
        (None, None) => Ok(DateRange {
            start_date: today,
            end_date: today + Duration::days(DEFAULT_TRIP_SPAN_DAYS),
        }),
    }
}
