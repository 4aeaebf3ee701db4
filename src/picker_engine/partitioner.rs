use rand::Rng;

use crate::picker_engine::{models::PartitionMode, selector::uniform_index};

/// Fisher-Yates shuffle in place; every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `list`, then split it into teams.
///
/// - `ByCount`: `value` teams, shuffled element `i` goes to team `i % value`.
///   An empty list gives `value` empty teams.
/// - `BySize`: chunks of `value`, the last chunk holding the remainder.
///   An empty list gives no teams.
///
/// `value == 0` returns an empty team list in either mode. `ByCount` allocates
/// all `value` teams up front; callers taking user input bound it with
/// [`TeamRequest::validate`](crate::TeamRequest::validate).
pub fn partition<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    list: &[T],
    mode: PartitionMode,
    value: usize,
) -> Vec<Vec<T>> {
    if value == 0 {
        return Vec::new();
    }

    let mut shuffled = list.to_vec();
    shuffle(rng, &mut shuffled);

    match mode {
        PartitionMode::ByCount => {
            let mut teams: Vec<Vec<T>> = (0..value)
                .map(|_| Vec::with_capacity(shuffled.len() / value + 1))
                .collect();
            for (i, item) in shuffled.into_iter().enumerate() {
                teams[i % value].push(item);
            }
            teams
        }
        PartitionMode::BySize => shuffled.chunks(value).map(<[T]>::to_vec).collect(),
    }
}
