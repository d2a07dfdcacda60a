use std::collections::BTreeMap;

use crate::aggregate::types::RideTotals;
use crate::model::DayRecord;

/// Sums the ride counters of `rows` per key, ordered by the key's `Ord`.
pub fn group_totals<K, F>(rows: &[DayRecord], key: F) -> BTreeMap<K, RideTotals>
where
    K: Ord,
    F: Fn(&DayRecord) -> K,
{
    let mut groups: BTreeMap<K, RideTotals> = BTreeMap::new();
    for row in rows {
        groups
            .entry(key(row))
            .or_default()
            .add(row.casual, row.registered, row.count);
    }
    groups
}

/// Returns the first item with the greatest key. `Iterator::max_by_key`
/// keeps the last one on ties, which is not what callers want here.
pub fn first_max_by_key<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.iter().fold(None, |best, item| match best {
        Some(current) if key(current) >= key(item) => Some(current),
        _ => Some(item),
    })
}
