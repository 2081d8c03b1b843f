//! Building parameters and the fleet sizing plan.
//!
//! # Design
//!
//! Fleet construction is driven by a `FleetPlan` triple — car capacity,
//! expected peak occupants, car count.  Where the plan comes from (a sizing
//! advisor, a config file, a hard-coded default) is deliberately opaque to
//! the dispatch core: `lift-fleet` consumes the triple and nothing else.

use std::fmt;

// ── BuildingParams ────────────────────────────────────────────────────────────

/// The building-level inputs a sizing advisor works from.
///
/// Typically loaded from a TOML/JSON file or hard-coded by the application
/// crate and passed to an advisor implementation in `lift-sizing`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingParams {
    /// Number of floors.  Floors are numbered `1..=floor_count`.
    pub floor_count: u8,

    /// Maximum building occupancy in people.
    pub max_occupancy: u32,

    /// Peak arrivals at the lobby per five-minute window.
    pub peak_arrivals_per_5min: u32,

    /// Average travel time between two adjacent floors, in seconds.
    pub inter_floor_travel_secs: u32,

    /// Desired maximum passenger waiting time, in seconds.
    pub target_wait_secs: u32,
}

// ── FleetPlan ─────────────────────────────────────────────────────────────────

/// A sizing recommendation: how many cars to build and how big.
///
/// `FleetPlan` is cheap to copy and intentionally holds no provenance — the
/// fleet constructor treats an advisor-produced plan and [`FleetPlan::FALLBACK`]
/// identically.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetPlan {
    /// Maximum occupants per car.  Must be positive.
    pub capacity: u16,

    /// Expected peak occupants across a five-minute window.  Informational;
    /// the dispatch core never reads it.
    pub expected_peak: u32,

    /// Number of cars to construct.  Must be positive.
    pub car_count: u16,
}

impl FleetPlan {
    /// The plan used whenever no advisor recommendation is available:
    /// two cars of capacity 20, expecting 20 peak occupants.
    pub const FALLBACK: FleetPlan = FleetPlan {
        capacity:      20,
        expected_peak: 20,
        car_count:     2,
    };

    /// `true` iff the plan can construct a working fleet.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.capacity > 0 && self.car_count > 0
    }
}

impl fmt::Display for FleetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cars x {} capacity (peak {})",
            self.car_count, self.capacity, self.expected_peak
        )
    }
}
