//! Reverse index from element value to heap positions
//!
//! Each distinct value maps to the ascending list of array slots that currently
//! hold it. Lists are kept short in practice (one entry per duplicate), so they are
//! stored inline in a [`SmallVec`] and kept sorted by binary search rather than in a
//! tree set. The largest position is the canonical slot for a value.
//!
//! A value with no positions never has an entry: empty lists are pruned eagerly.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

type Positions = SmallVec<[usize; 2]>;

/// Value -> sorted positions map kept in lock-step with a heap array
#[derive(Debug, Clone)]
pub(crate) struct PositionIndex<T> {
    map: FxHashMap<T, Positions>,
    pairs: usize,
}

impl<T: Eq + Hash> PositionIndex<T> {
    pub(crate) fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            pairs: 0,
        }
    }

    /// Records that `value` lives at `position`
    pub(crate) fn add(&mut self, value: T, position: usize) {
        let positions = self.map.entry(value).or_default();
        if let Err(at) = positions.binary_search(&position) {
            positions.insert(at, position);
            self.pairs += 1;
        }
    }

    /// Forgets that `value` lives at `position`, dropping the entry once empty
    pub(crate) fn remove(&mut self, value: &T, position: usize) {
        let Some(positions) = self.map.get_mut(value) else {
            return;
        };
        if let Ok(at) = positions.binary_search(&position) {
            positions.remove(at);
            self.pairs -= 1;
        }
        if positions.is_empty() {
            self.map.remove(value);
        }
    }

    /// Updates the index after slots `i` and `j` exchanged contents
    ///
    /// `now_at_i` and `now_at_j` are the post-swap values. Equal values share one
    /// position list that the exchange leaves unchanged.
    pub(crate) fn swap(&mut self, now_at_i: &T, now_at_j: &T, i: usize, j: usize) {
        if i == j || now_at_i == now_at_j {
            return;
        }
        // now_at_j moved from i to j, now_at_i moved from j to i
        Self::relocate(&mut self.map, now_at_j, i, j);
        Self::relocate(&mut self.map, now_at_i, j, i);
    }

    fn relocate(map: &mut FxHashMap<T, Positions>, value: &T, from: usize, to: usize) {
        if let Some(positions) = map.get_mut(value) {
            if let Ok(at) = positions.binary_search(&from) {
                positions.remove(at);
            }
            if let Err(at) = positions.binary_search(&to) {
                positions.insert(at, to);
            }
        }
    }

    /// Canonical position for `value`: the largest slot holding it
    pub(crate) fn canonical(&self, value: &T) -> Option<usize> {
        self.map.get(value).and_then(|positions| positions.last().copied())
    }

    pub(crate) fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// All positions holding `value`, ascending
    pub(crate) fn positions(&self, value: &T) -> &[usize] {
        self.map.get(value).map_or(&[][..], |positions| positions.as_slice())
    }

    /// Total number of (value, position) pairs
    pub(crate) fn pairs(&self) -> usize {
        self.pairs
    }

    #[cfg(test)]
    pub(crate) fn distinct(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&T, &[usize])> {
        self.map.iter().map(|(value, positions)| (value, positions.as_slice()))
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.pairs = 0;
    }
}
