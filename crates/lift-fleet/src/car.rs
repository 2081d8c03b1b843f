//! Per-car state: position, motion, occupancy, and the committed route.

use lift_core::{CarId, Motion};

/// Occupancy fraction at or above which a car stops accepting new hall
/// calls.  The boundary is inclusive: a car at exactly 80% is excluded.
pub const NEAR_CAPACITY_THRESHOLD: f64 = 0.8;

/// One elevator car.
///
/// Fields are `pub` because two collaborators mutate them: the dispatcher
/// (route commits and the idle→moving transition) and an external
/// motion-control layer (floor updates, occupancy changes, returning to
/// [`Motion::Idle`] once the route is exhausted).  The dispatch core never
/// advances `current_floor` or `occupancy` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Stable identifier, unique within the fleet.
    pub id: CarId,

    /// Maximum occupants.  Fixed at construction; always positive.
    pub capacity: u16,

    /// Building height this car serves.  Floors are `1..=floor_count`.
    pub floor_count: u8,

    /// The floor the car was last registered at, in `[1, floor_count]`.
    pub current_floor: u8,

    /// Current travel mode.
    pub motion: Motion,

    /// Occupants currently aboard, in `[0, capacity]`.
    pub occupancy: u16,

    /// Committed destinations: distinct floors in `[1, floor_count]`,
    /// ascending while `motion == Up`, descending while `Down`, insertion
    /// order while `Idle`.
    pub route: Vec<u8>,
}

impl Car {
    /// A new empty car parked at floor 1.
    pub fn new(id: CarId, capacity: u16, floor_count: u8) -> Self {
        Self {
            id,
            capacity,
            floor_count,
            current_floor: 1,
            motion: Motion::Idle,
            occupancy: 0,
            route: Vec::new(),
        }
    }

    /// Commit `floor` to the route.
    ///
    /// Out-of-range and duplicate floors are ignored without error, so the
    /// operation is total and idempotent.  The route is re-sorted to match
    /// the current motion; while idle, insertion order is preserved.
    pub fn add_destination(&mut self, floor: u8) {
        if floor < 1 || floor > self.floor_count || self.route.contains(&floor) {
            return;
        }
        self.route.push(floor);
        match self.motion {
            Motion::Up   => self.route.sort_unstable(),
            Motion::Down => self.route.sort_unstable_by(|a, b| b.cmp(a)),
            Motion::Idle => {}
        }
    }

    /// `true` iff occupancy has reached [`NEAR_CAPACITY_THRESHOLD`].
    #[inline]
    pub fn is_near_capacity(&self) -> bool {
        self.is_near_capacity_at(NEAR_CAPACITY_THRESHOLD)
    }

    /// `true` iff `occupancy >= threshold * capacity` (boundary inclusive).
    ///
    /// Excludes saturated cars from *new* assignments; it says nothing about
    /// riders already aboard.
    #[inline]
    pub fn is_near_capacity_at(&self, threshold: f64) -> bool {
        self.occupancy as f64 >= threshold * self.capacity as f64
    }

    /// Floors between the car and `floor`, ignoring heading.
    #[inline]
    pub fn distance_to(&self, floor: u8) -> u8 {
        self.current_floor.abs_diff(floor)
    }
}
