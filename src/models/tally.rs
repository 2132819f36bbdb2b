//! Per-area counters accumulated during aggregation.

use super::region::AreaId;

/// Counters for a single area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaTally {
    /// Points attributed to the area
    pub count: u64,
    /// Fallback bookkeeping value, set once to the number of input points the
    /// first time one of the area's parts fails to match a point
    pub total: Option<usize>,
}

/// Counter map for every area in a run, indexed by [`AreaId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCounters {
    tallies: Vec<AreaTally>,
    point_count: usize,
}

impl AreaCounters {
    /// Create zeroed counters for `area_count` areas scanned against
    /// `point_count` points
    pub fn new(area_count: usize, point_count: usize) -> Self {
        Self {
            tallies: vec![AreaTally::default(); area_count],
            point_count,
        }
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn get(&self, id: AreaId) -> Option<&AreaTally> {
        self.tallies.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AreaId, &AreaTally)> {
        self.tallies.iter().enumerate()
    }

    /// Attribute one point to an area
    pub fn record_match(&mut self, id: AreaId) {
        self.tallies[id].count += 1;
    }

    /// Note that a part of the area did not contain a point. Only the first
    /// miss writes `total`.
    pub fn record_miss(&mut self, id: AreaId) {
        let point_count = self.point_count;
        self.tallies[id].total.get_or_insert(point_count);
    }

    /// Combine counters from a disjoint slice of the point set.
    ///
    /// Counts add up. `total` only ever takes the full point count, so a miss
    /// recorded on either side is enough.
    pub fn merge(mut self, other: AreaCounters) -> Self {
        debug_assert_eq!(self.tallies.len(), other.tallies.len());
        for (mine, theirs) in self.tallies.iter_mut().zip(other.tallies) {
            mine.count += theirs.count;
            mine.total = mine.total.or(theirs.total);
        }
        self
    }
}
