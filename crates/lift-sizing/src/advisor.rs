//! The `SizingAdvisor` trait and the fallback contract.

use lift_core::{BuildingParams, FleetPlan};

use crate::{SizingResult, reply::parse_reply};

/// Pluggable fleet sizing.
///
/// Implement this trait to recommend a [`FleetPlan`] for given building
/// parameters.  Implementations should be deterministic for the same input
/// so fleet construction is reproducible; anything that can fail (network,
/// parsing) returns an error rather than guessing.
pub trait SizingAdvisor {
    /// Recommend a capacity / expected-peak / car-count triple for `params`.
    fn recommend(&self, params: &BuildingParams) -> SizingResult<FleetPlan>;
}

/// Obtain a plan from `advisor`, falling back to [`FleetPlan::FALLBACK`].
///
/// This is the construction-path contract: an advisor error, or a
/// recommendation that cannot build a working fleet (zero cars or zero
/// capacity), yields the fallback triple instead of propagating.  Callers
/// that want to *observe* the failure should call
/// [`SizingAdvisor::recommend`] directly and apply the fallback themselves.
pub fn plan_or_default<A: SizingAdvisor>(advisor: &A, params: &BuildingParams) -> FleetPlan {
    match advisor.recommend(params) {
        Ok(plan) if plan.is_valid() => plan,
        _ => FleetPlan::FALLBACK,
    }
}

// ── RemoteReplyAdvisor ────────────────────────────────────────────────────────

/// Adapts a text-producing transport into a [`SizingAdvisor`].
///
/// The transport is any `Fn(&BuildingParams) -> io::Result<String>` — an
/// HTTP client, a subprocess, or a test fixture.  Its reply is run through
/// the strict [`parse_reply`][crate::parse_reply] contract; the reply text
/// is never evaluated, only parsed.
pub struct RemoteReplyAdvisor<F> {
    transport: F,
}

impl<F> RemoteReplyAdvisor<F>
where
    F: Fn(&BuildingParams) -> std::io::Result<String>,
{
    pub fn new(transport: F) -> Self {
        Self { transport }
    }
}

impl<F> SizingAdvisor for RemoteReplyAdvisor<F>
where
    F: Fn(&BuildingParams) -> std::io::Result<String>,
{
    fn recommend(&self, params: &BuildingParams) -> SizingResult<FleetPlan> {
        let text = (self.transport)(params)?;
        parse_reply(&text)
    }
}
