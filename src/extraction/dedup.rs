//! First-seen-wins deduplication.

use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first item for every key, preserving encounter order.
///
/// Re-applying it to its own output is a no-op.
pub fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
