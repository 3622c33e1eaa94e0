//! Selection limits
//!
//! The app caps how many places can go into one itinerary as a function of
//! the trip length. The caps live in the store's `config_itinerary_limits`
//! table; this module is the pure guard applied before adding a place to
//! the current selection.

use crate::error::{ItineraryError, Result};
use crate::models::SelectionLimit;

/// Cap applied when no config row exists for the requested trip length.
pub const DEFAULT_MAX_PLACES: u32 = 10;

/// Checks whether one more place may join a selection of `selected` places.
///
/// Errors when the selection is already at the cap, so the caller can show
/// the limit message instead of silently dropping the click.
pub fn check_selection(selected: u32, limit: &SelectionLimit) -> Result<()> {
    if selected >= limit.max_places {
        return Err(ItineraryError::LimitExceeded {
            max_places: limit.max_places,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_the_cap() {
        let limit = SelectionLimit::new(2, 6);
        assert!(check_selection(0, &limit).is_ok());
        assert!(check_selection(5, &limit).is_ok());
    }

    #[test]
    fn test_at_the_cap() {
        let limit = SelectionLimit::new(2, 6);
        assert_eq!(
            check_selection(6, &limit).unwrap_err(),
            ItineraryError::LimitExceeded { max_places: 6 }
        );
    }

    #[test]
    fn test_fallback_limit() {
        let limit = SelectionLimit::fallback(3);
        assert_eq!(limit.max_places, DEFAULT_MAX_PLACES);
        assert!(check_selection(DEFAULT_MAX_PLACES - 1, &limit).is_ok());
        assert!(check_selection(DEFAULT_MAX_PLACES, &limit).is_err());
    }
}
