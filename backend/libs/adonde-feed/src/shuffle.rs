//! Page shuffling
//!
//! The community listing shuffles each fetched page for variety before
//! display. The random source is injected so callers use `thread_rng` in
//! production and a seeded rng in tests; shuffling is the caller's opt-in
//! and never happens inside the merger, which must preserve order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the items in a random order. Same multiset in, same multiset
/// out; nothing is dropped or duplicated.
pub fn shuffled<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();

        let mut output = shuffled(input.clone(), &mut rng);
        assert_ne!(output, input);

        output.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let input: Vec<u32> = (0..20).collect();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        assert_eq!(
            shuffled(input.clone(), &mut rng_a),
            shuffled(input, &mut rng_b)
        );
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled(Vec::<u32>::new(), &mut rng).is_empty());
        assert_eq!(shuffled(vec![9], &mut rng), vec![9]);
    }
}
