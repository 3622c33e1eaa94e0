//! Day allocation
//!
//! Converts a flat, user-ordered place selection into per-day buckets with
//! stable within-day ordering. Used identically when creating and when
//! editing an itinerary, so repeated saves of an unedited itinerary must
//! reproduce the stored assignments bit for bit.

use tracing::debug;

use crate::error::{ItineraryError, Result};
use crate::models::{DayAssignment, DayBucket};

/// Assigns each place to a day bucket and an order-within-itinerary index.
///
/// Places are split into blocks of `ceil(M / days)` in input order; the
/// `min` clamp folds the remainder of an uneven split into the final day
/// instead of creating a phantom extra day. The remainder is deliberately
/// not redistributed: 7 places over 3 days come out 3/3/1, matching what
/// users already have persisted.
pub fn allocate_days(place_ids: Vec<String>, days: u32) -> Result<Vec<DayAssignment>> {
    if days == 0 {
        return Err(ItineraryError::InvalidDays { days });
    }

    let total = place_ids.len() as u32;
    if total == 0 {
        return Ok(Vec::new());
    }

    // Only evaluated when total > 0, so never a division by zero.
    let block = total.div_ceil(days);
    debug!(places = total, days, block, "allocating itinerary days");

    Ok(place_ids
        .into_iter()
        .enumerate()
        .map(|(idx, place_id)| {
            let idx = idx as u32;
            DayAssignment {
                place_id,
                day: (1 + idx / block).min(days),
                order_index: idx + 1,
            }
        })
        .collect())
}

/// Groups persisted assignments into one bucket per non-empty day, ascending
/// by day, each bucket ordered by `order_index`. Tolerates rows arriving
/// unsorted from the store.
pub fn group_by_day(mut assignments: Vec<DayAssignment>) -> Vec<DayBucket> {
    assignments.sort_by_key(|a| (a.day, a.order_index));

    let mut buckets: Vec<DayBucket> = Vec::new();
    for assignment in assignments {
        match buckets.last_mut() {
            Some(bucket) if bucket.day == assignment.day => bucket.places.push(assignment),
            _ => buckets.push(DayBucket {
                day: assignment.day,
                places: vec![assignment],
            }),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_five_places_two_days() {
        let out = allocate_days(ids(&["a", "b", "c", "d", "e"]), 2).unwrap();

        let days: Vec<u32> = out.iter().map(|a| a.day).collect();
        let order: Vec<u32> = out.iter().map(|a| a.order_index).collect();

        // Block size = ceil(5/2) = 3: day 1 gets three places, day 2 two.
        assert_eq!(days, vec![1, 1, 1, 2, 2]);
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
        assert_eq!(out[3].place_id, "d");
    }

    #[test]
    fn test_more_days_than_places() {
        let out = allocate_days(ids(&["a", "b", "c"]), 5).unwrap();

        assert_eq!(out.len(), 3);
        for (i, assignment) in out.iter().enumerate() {
            assert_eq!(assignment.day, i as u32 + 1);
        }
        // No placeholder rows for days 4 and 5.
        assert!(out.iter().all(|a| a.day <= 3));
    }

    #[test]
    fn test_single_day_takes_everything() {
        let out = allocate_days(ids(&["a", "b", "c", "d"]), 1).unwrap();
        assert!(out.iter().all(|a| a.day == 1));
        assert_eq!(out.last().unwrap().order_index, 4);
    }

    #[test]
    fn test_empty_selection_is_not_an_error() {
        assert_eq!(allocate_days(Vec::new(), 3).unwrap(), Vec::new());
    }

    #[test]
    fn test_zero_days_rejected() {
        let err = allocate_days(ids(&["a"]), 0).unwrap_err();
        assert_eq!(err, ItineraryError::InvalidDays { days: 0 });
    }

    #[test]
    fn test_remainder_folds_into_last_day() {
        // 7 over 3 buckets asymmetrically: 3/3/1, never 3/2/2.
        let out = allocate_days(ids(&["a", "b", "c", "d", "e", "f", "g"]), 3).unwrap();
        let per_day = |d| out.iter().filter(|a| a.day == d).count();
        assert_eq!((per_day(1), per_day(2), per_day(3)), (3, 3, 1));
    }

    #[test]
    fn test_days_monotonic_and_ids_preserved() {
        let input = ids(&["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"]);
        let out = allocate_days(input.clone(), 3).unwrap();

        assert_eq!(out.len(), input.len());
        let returned: Vec<&str> = out.iter().map(|a| a.place_id.as_str()).collect();
        assert_eq!(returned, input.iter().map(String::as_str).collect::<Vec<_>>());

        for pair in out.windows(2) {
            assert!(pair[0].day <= pair[1].day);
        }
        assert!(out.iter().all(|a| a.day <= 3));
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let input = ids(&["a", "b", "c", "d", "e", "f", "g"]);
        let first = allocate_days(input.clone(), 4).unwrap();
        let second = allocate_days(input, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_by_day_sorts_store_rows() {
        let rows = vec![
            DayAssignment {
                place_id: "c".into(),
                day: 2,
                order_index: 3,
            },
            DayAssignment {
                place_id: "a".into(),
                day: 1,
                order_index: 1,
            },
            DayAssignment {
                place_id: "d".into(),
                day: 2,
                order_index: 4,
            },
            DayAssignment {
                place_id: "b".into(),
                day: 1,
                order_index: 2,
            },
        ];

        let buckets = group_by_day(rows);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].day, 1);
        assert_eq!(buckets[1].day, 2);
        let day2: Vec<&str> = buckets[1].places.iter().map(|a| a.place_id.as_str()).collect();
        assert_eq!(day2, vec!["c", "d"]);
    }

    #[test]
    fn test_group_by_day_skips_empty_days() {
        let out = allocate_days(ids(&["a", "b"]), 4).unwrap();
        let buckets = group_by_day(out);
        let days: Vec<u32> = buckets.iter().map(|b| b.day).collect();
        assert_eq!(days, vec![1, 2]);
    }
}
