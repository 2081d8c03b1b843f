//! Dispatch observer trait for assignment reporting.
//!
//! The dispatcher itself never prints or logs; every dispatch event flows
//! through this seam so applications decide what reporting looks like.

use lift_core::{CarId, Direction, HallCall};

/// Callbacks invoked by [`Fleet::dispatch`][crate::Fleet::dispatch] once per
/// submitted call.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct ConsoleReporter;
///
/// impl DispatchObserver for ConsoleReporter {
///     fn on_assigned(&mut self, call: HallCall, car: CarId) {
///         println!("{car} assigned to {call}");
///     }
///     fn on_unassigned(&mut self, call: HallCall) {
///         println!("no suitable car for {call}");
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A call was committed to `car`'s route.
    fn on_assigned(&mut self, _call: HallCall, _car: CarId) {}

    /// A valid call found no qualifying car.  It stays recorded in the
    /// registry but will not be retried by the fleet.
    fn on_unassigned(&mut self, _call: HallCall) {}

    /// A call was rejected before recording (floor outside the building).
    fn on_rejected(&mut self, _floor: u8, _direction: Direction) {}
}

/// A [`DispatchObserver`] that does nothing.  Use when you need to call
/// `dispatch` but don't want callbacks.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
