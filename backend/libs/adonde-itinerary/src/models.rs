use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of an itinerary's place list, as persisted to the store's
/// `itinerary_places` table. `day` and `order_index` are derived by the
/// allocator, never set by the user directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAssignment {
    pub place_id: String,
    /// Calendar day within the trip, 1-based.
    pub day: u32,
    /// Position within the whole itinerary, 1-based, in user click order.
    pub order_index: u32,
}

/// All places assigned to a single day, in visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub day: u32,
    pub places: Vec<DayAssignment>,
}

/// Resolved trip dates after defaulting rules have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Cap on how many places a user may select for a trip of a given length.
/// Rows come from the store's `config_itinerary_limits` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionLimit {
    pub days: u32,
    pub max_places: u32,
}

impl SelectionLimit {
    pub fn new(days: u32, max_places: u32) -> Self {
        Self { days, max_places }
    }

    /// Limit used when the config table has no row for this trip length.
    pub fn fallback(days: u32) -> Self {
        Self {
            days,
            max_places: crate::limits::DEFAULT_MAX_PLACES,
        }
    }
}
