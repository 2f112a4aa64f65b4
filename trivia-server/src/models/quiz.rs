//! Quiz question selection

use rand::Rng;

/// Take one candidate uniformly at random, or `None` once the pool is exhausted.
pub fn pick_random<T, R>(mut candidates: Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_pool_ends_quiz() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(Vec::<i32>::new(), &mut rng), None);
    }

    #[test]
    fn single_candidate_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(vec![42], &mut rng), Some(42));
    }

    #[test]
    fn every_candidate_reachable() {
        let mut rng = StdRng::seed_from_u64(1234);
        let seen: HashSet<i32> = (0..500)
            .filter_map(|_| pick_random(vec![1, 2, 3, 4], &mut rng))
            .collect();
        assert_eq!(seen, HashSet::from([1, 2, 3, 4]));
    }
}
