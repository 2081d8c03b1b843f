//! A deterministic, dependency-free sizing heuristic.

use lift_core::{BuildingParams, FleetPlan};

use crate::{SizingAdvisor, SizingResult};

/// Sizes a fleet from round-trip time and peak demand.
///
/// # Model
///
/// A car's worst-case round trip is lobby → top floor → lobby:
/// `2 * (floor_count - 1) * inter_floor_travel_secs`.  From that:
///
/// 1. **Car count** — enough cars that one departs the lobby roughly every
///    `target_wait_secs`: `ceil(round_trip / target_wait)`, clamped to
///    `[1, MAX_CARS]`.
/// 2. **Capacity** — each car makes `300 / round_trip` trips per five-minute
///    window (at least one); capacity is the peak arrivals divided across
///    all trips, clamped to `[MIN_CAPACITY, MAX_CAPACITY]`.
/// 3. **Expected peak** — passed through from
///    `params.peak_arrivals_per_5min`.
///
/// Total and deterministic: every input produces a valid plan, so
/// `plan_or_default` never falls back when using this advisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAdvisor;

impl HeuristicAdvisor {
    /// Plans never recommend more cars than a lobby can board from.
    pub const MAX_CARS: u32 = 16;

    /// Practical passenger-car size bounds.
    pub const MIN_CAPACITY: u32 = 2;
    pub const MAX_CAPACITY: u32 = 30;
}

impl SizingAdvisor for HeuristicAdvisor {
    fn recommend(&self, params: &BuildingParams) -> SizingResult<FleetPlan> {
        // Lobby → top → lobby, never zero so the divisions below are safe.
        let round_trip_secs =
            (2 * (params.floor_count.max(1) as u32 - 1) * params.inter_floor_travel_secs).max(1);

        let target_wait = params.target_wait_secs.max(1);
        let car_count = round_trip_secs
            .div_ceil(target_wait)
            .clamp(1, Self::MAX_CARS);

        let trips_per_window = (300 / round_trip_secs).max(1);
        let capacity = params
            .peak_arrivals_per_5min
            .div_ceil(car_count * trips_per_window)
            .clamp(Self::MIN_CAPACITY, Self::MAX_CAPACITY);

        Ok(FleetPlan {
            capacity:      capacity as u16,
            expected_peak: params.peak_arrivals_per_5min,
            car_count:     car_count as u16,
        })
    }
}
