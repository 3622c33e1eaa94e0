//! Itinerary planning rules for the Adonde discovery app
//!
//! Pure, synchronous helpers shared by the itinerary create and edit flows:
//! - Day allocation: bucket a user-ordered place selection over a trip length
//! - Per-day grouping for display of persisted assignments
//! - Selection limits (max places as a function of trip length)
//! - Date-range resolution with the app's defaulting rules
//!
//! Persistence and presentation stay with the callers; nothing here performs
//! I/O or holds state beyond its arguments.

mod error;

pub mod allocator;
pub mod dates;
pub mod limits;
pub mod models;

pub use allocator::{allocate_days, group_by_day};
pub use dates::{resolve_date_range, DEFAULT_TRIP_SPAN_DAYS};
pub use error::{ItineraryError, Result};
pub use limits::{check_selection, DEFAULT_MAX_PLACES};
pub use models::{DateRange, DayAssignment, DayBucket, SelectionLimit};
