use std::cmp::Ordering;

use crate::common::WaypointId;

/// Entry of the ordered open index.
///
/// Keys are removed from the index whenever their waypoint is superseded or
/// closed, so the first key is always a live open waypoint.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenKey {
    pub(super) total_cost: f64,
    pub(super) rank: f64,
    pub(super) id: WaypointId,
}

impl PartialEq for OpenKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenKey {}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN of either sign sorts after every real cost.
        self.total_cost
            .is_nan()
            .cmp(&other.total_cost.is_nan())
            .then_with(|| self.total_cost.total_cmp(&other.total_cost))
            .then_with(|| self.rank.is_nan().cmp(&other.rank.is_nan()))
            .then_with(|| self.rank.total_cmp(&other.rank))
            // Ids grow with insertion, so equal keys fall back to first inserted.
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn key(total_cost: f64, rank: f64, id: usize) -> OpenKey {
        OpenKey {
            total_cost,
            rank,
            id: WaypointId(id),
        }
    }

    #[test]
    fn test_open_key_order() {
        let mut order = BTreeSet::new();
        order.insert(key(5.0, 0.0, 0));
        order.insert(key(2.0, 0.0, 3));
        order.insert(key(2.0, -1.0, 4));
        order.insert(key(2.0, -1.0, 1));

        let ids: Vec<usize> = order.iter().map(|key| key.id.index()).collect();
        assert_eq!(ids, vec![1, 4, 3, 0]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let negative_nan = f64::INFINITY + f64::NEG_INFINITY;
        let mut order = BTreeSet::new();
        order.insert(key(-negative_nan.abs(), 0.0, 0));
        order.insert(key(negative_nan, 0.0, 1));
        order.insert(key(f64::INFINITY, 0.0, 2));
        order.insert(key(5.0, 0.0, 3));

        let ids: Vec<usize> = order.iter().map(|key| key.id.index()).collect();
        assert_eq!(&ids[..2], &[3, 2]);
    }

    #[test]
    fn test_remove_exact_key() {
        let mut order = BTreeSet::new();
        order.insert(key(1.0, 0.0, 0));
        order.insert(key(1.0, 0.0, 1));
        assert!(order.remove(&key(1.0, 0.0, 0)));
        assert_eq!(order.first().map(|key| key.id), Some(WaypointId(1)));
    }
}
