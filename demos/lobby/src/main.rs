//! lobby — smallest end-to-end demo for the rust_lift dispatch framework.
//!
//! Sizes a fleet for a 10-floor office block with the bundled heuristic
//! advisor, replays a short scripted morning (the three classic calls:
//! 3 up, 5 down, 7 up), then fires a burst of seeded-random hall calls.
//! No motion is simulated — cars accumulate routes and the summary shows
//! where each would go.

use std::io::Cursor;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::{BuildingParams, CarId, Direction, HallCall};
use lift_fleet::{DispatchObserver, Fleet, load_calls_reader};
use lift_sizing::{HeuristicAdvisor, plan_or_default};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64   = 42;
const RANDOM_CALLS: usize = 12;

const BUILDING: BuildingParams = BuildingParams {
    floor_count:             10,
    max_occupancy:           500,
    peak_arrivals_per_5min:  40,
    inter_floor_travel_secs: 3,
    target_wait_secs:        30,
};

// ── Call script ───────────────────────────────────────────────────────────────

const CALL_SCRIPT_CSV: &str = "\
floor,direction
3,up
5,down
7,up
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every dispatch outcome and tallies them for the final summary.
#[derive(Default)]
struct ConsoleReporter {
    assigned:   usize,
    unassigned: usize,
    rejected:   usize,
}

impl DispatchObserver for ConsoleReporter {
    fn on_assigned(&mut self, call: HallCall, car: CarId) {
        self.assigned += 1;
        println!("  {car} <- {call}");
    }

    fn on_unassigned(&mut self, call: HallCall) {
        self.unassigned += 1;
        println!("  no suitable car for {call}");
    }

    fn on_rejected(&mut self, floor: u8, direction: Direction) {
        self.rejected += 1;
        println!("  rejected: floor {floor} {direction} is outside the building");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Sizing.  The heuristic advisor is local and total, but the fallback
    // path is exercised the same way a remote advisor would be.
    let plan = plan_or_default(&HeuristicAdvisor, &BUILDING);
    println!("sized fleet: {plan}");

    let mut fleet = Fleet::new(BUILDING.floor_count, &plan)?;
    let mut reporter = ConsoleReporter::default();

    // Scripted calls.
    println!("\nscripted calls:");
    let script = load_calls_reader(Cursor::new(CALL_SCRIPT_CSV))?;
    for call in script {
        fleet.dispatch(call, &mut reporter);
    }

    // Seeded-random burst.  Floor 0 appears occasionally on purpose so the
    // rejection path shows up in the output.
    println!("\nrandom burst ({RANDOM_CALLS} calls, seed {SEED}):");
    let mut rng = SmallRng::seed_from_u64(SEED);
    for _ in 0..RANDOM_CALLS {
        let floor: u8 = rng.gen_range(0..=BUILDING.floor_count);
        let direction = if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down };
        fleet.dispatch(HallCall::new(floor, direction), &mut reporter);
    }

    // Summary.
    println!(
        "\n{} assigned, {} unassigned, {} rejected; {} floors in the registry",
        reporter.assigned,
        reporter.unassigned,
        reporter.rejected,
        fleet.registry.len(),
    );
    for car in &fleet.cars {
        println!(
            "  {}: at floor {}, {}, route {:?}",
            car.id, car.current_floor, car.motion, car.route
        );
    }

    Ok(())
}
