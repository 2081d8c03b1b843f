//! `lift-fleet` — car state, call bookkeeping, and the dispatch policy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`car`]      | `Car` — position, motion, occupancy, and an ordered route      |
//! | [`registry`] | `CallRegistry` — floor → last-requested direction bookkeeping  |
//! | [`fleet`]    | `Fleet` dispatcher, selection policy, `DispatchOutcome`        |
//! | [`observer`] | `DispatchObserver` trait, `NoopObserver`                       |
//! | [`script`]   | CSV hall-call script loader                                    |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                                 |
//!
//! # Dispatch flow
//!
//! ```text
//! HallCall ──▶ Fleet::submit_call
//!                │ floor out of range?      → Rejected (no state change)
//!                │ registry[floor] = dir    (overwrite, never removed)
//!                │ select_car:  skip near-capacity cars;
//!                │              idle OR approaching in the same direction;
//!                │              nearest wins, fleet order breaks ties
//!                ├─ winner  → car.add_destination(floor), idle car turns
//!                │            toward the floor             → Assigned(id)
//!                └─ nobody  → entry stays in the registry  → NoCarAvailable
//! ```
//!
//! The core is synchronous and single-threaded: `submit_call` takes
//! `&mut self`, so the read-then-commit sequence over all cars can never
//! interleave with another call.  Callers serving concurrent call buttons
//! must serialize into one `Fleet` (e.g. behind a mutex or a single-writer
//! channel).

pub mod car;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod registry;
pub mod script;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Car, NEAR_CAPACITY_THRESHOLD};
pub use error::{FleetError, FleetResult};
pub use fleet::{DispatchOutcome, Fleet};
pub use observer::{DispatchObserver, NoopObserver};
pub use registry::CallRegistry;
pub use script::{load_calls_csv, load_calls_reader};
