use rand::Rng;

/// Draw one index uniformly from `0..len`.
///
/// Goes through `Rng::gen_range`, whose integer sampler rejects the biased
/// tail of the raw range instead of reducing it with `%`. Every index in the
/// range has exactly the same probability. `len` must be non-zero.
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "uniform_index over an empty range");
    rng.gen_range(0..len)
}

/// Draw source positions from a list of `len` items.
///
/// Without replacement each draw is uniform over the positions not yet taken,
/// and at most `len` positions come back. With replacement every draw is
/// uniform over all `len` positions and exactly `count` come back, so the
/// result is allocated up front; bound `count` first (see
/// [`PickRequest::validate`](crate::PickRequest::validate)).
pub fn select_indices<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
    with_replacement: bool,
) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }

    if with_replacement {
        return (0..count).map(|_| uniform_index(rng, len)).collect();
    }

    let mut pool: Vec<usize> = (0..len).collect();
    let draws = count.min(len);
    let mut picked = Vec::with_capacity(draws);
    for _ in 0..draws {
        let slot = uniform_index(rng, pool.len());
        picked.push(pool.remove(slot));
    }
    picked
}

/// Draw `count` elements from `list`; the caller's slice is left untouched.
pub fn select<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    list: &[T],
    count: usize,
    with_replacement: bool,
) -> Vec<T> {
    select_indices(rng, list.len(), count, with_replacement)
        .into_iter()
        .map(|i| list[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_list_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(select(&mut rng, &empty, 5, false).is_empty());
        assert!(select(&mut rng, &empty, 5, true).is_empty());
    }

    #[test]
    fn zero_count_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(select(&mut rng, &[1, 2, 3], 0, false).is_empty());
        assert!(select(&mut rng, &[1, 2, 3], 0, true).is_empty());
    }

    #[test]
    fn without_replacement_caps_at_list_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let list = ["a", "b", "c", "d"];
        for count in 0..10 {
            let idx = select_indices(&mut rng, list.len(), count, false);
            assert_eq!(idx.len(), count.min(list.len()));
            let unique: HashSet<_> = idx.iter().collect();
            assert_eq!(unique.len(), idx.len(), "duplicate position for count={count}");
            assert!(idx.iter().all(|&i| i < list.len()));
        }
    }

    #[test]
    fn without_replacement_full_draw_is_permutation() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut idx = select_indices(&mut rng, 20, 20, false);
        idx.sort_unstable();
        assert_eq!(idx, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_values_can_both_be_drawn() {
        let mut rng = StdRng::seed_from_u64(5);
        let picks = select(&mut rng, &["x", "x"], 2, false);
        assert_eq!(picks, vec!["x", "x"]);
    }

    #[test]
    fn with_replacement_returns_exact_count() {
        let mut rng = StdRng::seed_from_u64(6);
        let list = [10, 20, 30];
        let picks = select(&mut rng, &list, 50, true);
        assert_eq!(picks.len(), 50);
        assert!(picks.iter().all(|p| list.contains(p)));
    }

    #[test]
    fn uniform_index_frequencies_are_flat() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let n = 7;
        let draws = 70_000;
        let mut hits = vec![0usize; n];
        for _ in 0..draws {
            hits[uniform_index(&mut rng, n)] += 1;
        }
        let expected = draws / n;
        for (i, &h) in hits.iter().enumerate() {
            let diff = h.abs_diff(expected);
            assert!(diff < expected / 20, "index {i} drawn {h} times, expected ~{expected}");
        }
    }

    #[test]
    fn first_draw_without_replacement_is_uniform() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 5;
        let rounds = 25_000;
        let mut hits = vec![0usize; n];
        for _ in 0..rounds {
            let idx = select_indices(&mut rng, n, 3, false);
            for i in idx {
                hits[i] += 1;
            }
        }
        // Each position lands in a 3-of-5 draw with probability 3/5.
        let expected = rounds * 3 / n;
        for (i, &h) in hits.iter().enumerate() {
            assert!(h.abs_diff(expected) < expected / 20, "position {i}: {h} vs ~{expected}");
        }
    }

    #[test]
    fn caller_slice_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(7);
        let list = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let before = list.clone();
        let _ = select(&mut rng, &list, 3, false);
        assert_eq!(list, before);
    }
}
