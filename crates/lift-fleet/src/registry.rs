//! Hall-call bookkeeping: which direction was last requested per floor.

use std::collections::BTreeMap;

use lift_core::Direction;

/// A map from floor to the last-requested direction.
///
/// This is bookkeeping only, not a work queue: recording a call for a floor
/// overwrites any earlier entry, and entries are never removed — not even
/// after a car is assigned.  Unassigned calls are fire-and-forget; the
/// registry lets callers observe what has been requested, nothing more.
///
/// Backed by a `BTreeMap` so iteration is in floor order, which keeps logs
/// and tests deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallRegistry {
    calls: BTreeMap<u8, Direction>,
}

impl CallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the requested direction for `floor`.
    #[inline]
    pub fn record(&mut self, floor: u8, direction: Direction) {
        self.calls.insert(floor, direction);
    }

    /// The last direction requested at `floor`, if any call was ever seen.
    #[inline]
    pub fn direction_for(&self, floor: u8) -> Option<Direction> {
        self.calls.get(&floor).copied()
    }

    /// Number of distinct floors with a recorded call.
    #[inline]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// All recorded calls in ascending floor order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Direction)> + '_ {
        self.calls.iter().map(|(&floor, &dir)| (floor, dir))
    }
}
