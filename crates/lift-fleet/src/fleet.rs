//! The `Fleet` dispatcher and its car-selection policy.

use std::fmt;

use lift_core::{CarId, Direction, FleetPlan, HallCall, LiftError, LiftResult, Motion};

use crate::{Car, CallRegistry, DispatchObserver};

// ── DispatchOutcome ───────────────────────────────────────────────────────────

/// The result of submitting one hall call.  Every submission produces a
/// definite outcome; none of the variants is an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DispatchOutcome {
    /// The call was committed to this car's route.
    Assigned(CarId),

    /// The call was valid and recorded, but no car qualified.  The registry
    /// keeps the entry; the fleet does not retry on its own.
    NoCarAvailable,

    /// The floor was outside the building.  Nothing was recorded or mutated.
    Rejected,
}

impl DispatchOutcome {
    /// The winning car, if any.
    #[inline]
    pub fn assigned_car(self) -> Option<CarId> {
        match self {
            DispatchOutcome::Assigned(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        matches!(self, DispatchOutcome::Assigned(_))
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Assigned(id)   => write!(f, "assigned to {id}"),
            DispatchOutcome::NoCarAvailable => f.write_str("no car available"),
            DispatchOutcome::Rejected       => f.write_str("rejected"),
        }
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// All cars in one building plus the call registry, owned exclusively.
///
/// `submit_call` reads every car and then conditionally mutates one, so the
/// whole operation runs under a single `&mut self` borrow — concurrent call
/// sources must serialize into the fleet (a mutex around the `Fleet`, or a
/// single-writer channel feeding one dispatch loop).
#[derive(Debug, Clone)]
pub struct Fleet {
    /// Building height.  Floors are `1..=floor_count`.
    pub floor_count: u8,

    /// The cars, in construction order.  Membership is fixed for the life of
    /// the fleet; `CarId(i)` indexes `cars[i]`.
    pub cars: Vec<Car>,

    /// Floor → last-requested direction bookkeeping.
    pub registry: CallRegistry,
}

impl Fleet {
    /// Build a fleet of `plan.car_count` cars, each with `plan.capacity`,
    /// all parked at floor 1.
    ///
    /// The plan usually comes from a sizing advisor (with the advisor's
    /// fallback already applied), so an invalid plan here is a caller bug,
    /// not an advisor failure.
    pub fn new(floor_count: u8, plan: &FleetPlan) -> LiftResult<Fleet> {
        if floor_count < 1 {
            return Err(LiftError::Config("floor_count must be at least 1".into()));
        }
        if !plan.is_valid() {
            return Err(LiftError::Config(format!(
                "fleet plan needs positive capacity and car count, got {plan}"
            )));
        }

        let cars = (0..plan.car_count)
            .map(|i| Car::new(CarId(i), plan.capacity, floor_count))
            .collect();

        Ok(Fleet {
            floor_count,
            cars,
            registry: CallRegistry::new(),
        })
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Submit one hall call: validate, record, select, commit.
    ///
    /// Out-of-range floors are rejected with no state change.  A valid call
    /// is always recorded in the registry, whether or not a car qualifies.
    /// On assignment the floor joins the winner's route, and an idle winner
    /// turns toward the floor (a call at its own floor leaves it idle).
    pub fn submit_call(&mut self, floor: u8, direction: Direction) -> DispatchOutcome {
        if floor < 1 || floor > self.floor_count {
            return DispatchOutcome::Rejected;
        }

        self.registry.record(floor, direction);

        match self.select_car(floor, direction) {
            None => DispatchOutcome::NoCarAvailable,
            Some(id) => {
                let car = &mut self.cars[id.index()];
                car.add_destination(floor);
                if car.motion.is_idle() {
                    car.motion = Motion::toward(car.current_floor, floor);
                }
                DispatchOutcome::Assigned(id)
            }
        }
    }

    /// [`submit_call`][Self::submit_call], reporting the outcome through an
    /// observer before returning it.
    pub fn dispatch<O: DispatchObserver>(
        &mut self,
        call:     HallCall,
        observer: &mut O,
    ) -> DispatchOutcome {
        let outcome = self.submit_call(call.floor, call.direction);
        match outcome {
            DispatchOutcome::Assigned(id)   => observer.on_assigned(call, id),
            DispatchOutcome::NoCarAvailable => observer.on_unassigned(call),
            DispatchOutcome::Rejected       => observer.on_rejected(call.floor, call.direction),
        }
        outcome
    }

    // ── Selection policy ──────────────────────────────────────────────────

    /// Pick the car to serve a call at `floor` going `direction`.
    ///
    /// Eligibility, per car in fleet order:
    /// - near-capacity cars are skipped outright;
    /// - idle cars always qualify;
    /// - moving cars qualify iff their motion serves `direction` *and* they
    ///   are still approaching the floor (`current_floor < floor` going up,
    ///   `> floor` going down — a car already at or past the floor would
    ///   have to come back).
    ///
    /// Among eligible cars the smallest `distance_to(floor)` wins.  The
    /// strict `<` below keeps the first car on ties: static fleet order is
    /// the tie-break, deliberately, so repeated runs assign identically.
    ///
    /// Greedy and O(cars) per call — no lookahead across pending calls and
    /// no rebalancing of routes already committed.
    pub fn select_car(&self, floor: u8, direction: Direction) -> Option<CarId> {
        let mut best: Option<(u8, CarId)> = None;

        for car in &self.cars {
            if car.is_near_capacity() {
                continue;
            }
            let approaching = match direction {
                Direction::Up   => car.current_floor < floor,
                Direction::Down => car.current_floor > floor,
            };
            if !(car.motion.is_idle() || (car.motion.serves(direction) && approaching)) {
                continue;
            }

            let distance = car.distance_to(floor);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, car.id));
            }
        }

        best.map(|(_, id)| id)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The car with `id`, if it exists in this fleet.
    #[inline]
    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }
}
