//! Itinerary error types

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("invalid day count: {days} (must be at least 1)")]
    InvalidDays { days: u32 },

    #[error("selection limit reached: at most {max_places} places for this trip length")]
    LimitExceeded { max_places: u32 },

    #[error("a start date was given without an end date")]
    MissingEndDate,

    #[error("an end date was given without a start date")]
    MissingStartDate,

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, ItineraryError>;
