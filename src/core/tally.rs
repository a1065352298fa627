//! Group-and-count helpers shared by every report, plus the first-max rule.

use crate::models::Trip;
use std::collections::{BTreeMap, HashSet};

/// A winning key with its count. `None` when nothing was counted.
pub type Peak<K> = Option<(K, usize)>;

/// Pick the entry with the highest count. On ties the first entry in
/// iteration order wins; zero counts never win.
pub fn first_max<K, I>(entries: I) -> Peak<K>
where
    I: IntoIterator<Item = (K, usize)>,
{
    let mut best: Peak<K> = None;
    for (key, count) in entries {
        if count == 0 {
            continue;
        }
        match &best {
            Some((_, top)) if *top >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best
}

/// Count trips per key over a fixed enumeration `order`. Keys outside
/// `order`, and trips for which `key` returns `None`, are not counted.
pub fn count_over<K, F>(trips: &[Trip], order: &[K], key: F) -> Vec<(K, usize)>
where
    K: Copy + PartialEq,
    F: Fn(&Trip) -> Option<K>,
{
    let mut counts: Vec<(K, usize)> = order.iter().map(|k| (*k, 0)).collect();
    for k in trips.iter().filter_map(&key) {
        if let Some(slot) = counts.iter_mut().find(|(candidate, _)| *candidate == k) {
            slot.1 += 1;
        }
    }
    counts
}

/// Number of distinct row ids per key, keys in ascending order.
/// Trips for which `key` returns `None` are left out.
pub fn distinct_ids_by<'a, K, F>(trips: &'a [Trip], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&'a Trip) -> Option<K>,
{
    let mut groups: BTreeMap<K, HashSet<u64>> = BTreeMap::new();
    for trip in trips {
        if let Some(k) = key(trip) {
            groups.entry(k).or_default().insert(trip.id);
        }
    }
    groups.into_iter().map(|(k, ids)| (k, ids.len())).collect()
}

/// `distinct_ids_by` followed by `first_max`: ties go to the smallest key.
pub fn mode_by<'a, K, F>(trips: &'a [Trip], key: F) -> Peak<K>
where
    K: Ord,
    F: Fn(&'a Trip) -> Option<K>,
{
    first_max(distinct_ids_by(trips, key))
}
