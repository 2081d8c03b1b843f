//! `lift-core` — foundational types for the `rust_lift` dispatch framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `CarId`                                              |
//! | [`call`]     | `Direction`, `HallCall`                              |
//! | [`motion`]   | `Motion` — per-car movement state                    |
//! | [`building`] | `BuildingParams`, `FleetPlan`                        |
//! | [`error`]    | `LiftError`, `LiftResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod building;
pub mod call;
pub mod error;
pub mod ids;
pub mod motion;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{BuildingParams, FleetPlan};
pub use call::{Direction, HallCall};
pub use error::{LiftError, LiftResult};
pub use ids::CarId;
pub use motion::Motion;
