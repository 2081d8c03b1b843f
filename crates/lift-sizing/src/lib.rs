//! `lift-sizing` — fleet sizing advisors for the `rust_lift` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`advisor`]   | `SizingAdvisor` trait, `plan_or_default` fallback contract  |
//! | [`heuristic`] | `HeuristicAdvisor` — deterministic local sizing             |
//! | [`reply`]     | Strict parser for remote advisors' one-line replies         |
//! | [`error`]     | `SizingError`, `SizingResult<T>`                            |
//!
//! # Design notes
//!
//! An advisor turns [`BuildingParams`][lift_core::BuildingParams] into a
//! [`FleetPlan`][lift_core::FleetPlan] triple.  The dispatch core treats the
//! triple as opaque construction input, so advisors can be swapped freely:
//! the bundled [`HeuristicAdvisor`] computes it locally, while
//! [`RemoteReplyAdvisor`] adapts any text-producing transport (an HTTP call,
//! a subprocess, a fixture string) through the strict [`reply`] parser.
//!
//! Advisor failure is never fatal: [`plan_or_default`] absorbs every error
//! — unreachable transport, garbled reply, out-of-contract triple — into
//! [`FleetPlan::FALLBACK`][lift_core::FleetPlan::FALLBACK], so the fleet
//! construction path always receives a usable plan.

pub mod advisor;
pub mod error;
pub mod heuristic;
pub mod reply;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use advisor::{RemoteReplyAdvisor, SizingAdvisor, plan_or_default};
pub use error::{SizingError, SizingResult};
pub use heuristic::HeuristicAdvisor;
pub use reply::{parse_reply, read_reply};
