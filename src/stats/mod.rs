/// Statistic groups over the filtered trip table.
///
/// Each group is a pure `compute` returning a plain stats struct, with the
/// operator-facing report expressed as a `Display` impl. The orchestrator
/// times and prints each group.
pub mod duration;
pub mod station;
pub mod travel;
pub mod user;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value, or `None` for an empty input.
///
/// Tie-break is explicit: among equally frequent values the one encountered
/// first in iteration (load) order wins.
pub fn mode<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (seen_at, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, seen_at));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(_, (count, first_seen))| (*count, Reverse(*first_seen)))
        .map(|(value, _)| value)
}

/// Per-value occurrence counts, ordered by descending count with first-seen
/// order breaking ties.
pub fn value_counts<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (seen_at, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, seen_at));
        entry.0 += 1;
    }
    let mut ordered: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ordered
        .into_iter()
        .map(|(value, count, _)| (value, count))
        .collect()
}
