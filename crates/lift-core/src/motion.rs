//! Per-car movement state.
//!
//! The dispatch core never moves a car itself; it reads `Motion` when
//! evaluating eligibility and sets it exactly once per car lifetime segment —
//! when an idle car receives its first committed destination.  Transitioning
//! back to `Idle` on route exhaustion is the motion-control collaborator's
//! contract.

use crate::Direction;

/// A car's current travel mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Stationary with no committed heading (default state).
    #[default]
    Idle,
    /// Travelling toward higher floors.
    Up,
    /// Travelling toward lower floors.
    Down,
}

impl Motion {
    /// The motion a car at `from` adopts to reach `to`.
    ///
    /// Returns `Idle` when the floors are equal — a call at the car's own
    /// floor needs no travel.
    #[inline]
    pub fn toward(from: u8, to: u8) -> Motion {
        match from.cmp(&to) {
            std::cmp::Ordering::Less    => Motion::Up,
            std::cmp::Ordering::Greater => Motion::Down,
            std::cmp::Ordering::Equal   => Motion::Idle,
        }
    }

    /// `true` if a car in this motion travels the way `direction` asks.
    ///
    /// `Idle` serves neither direction here; idle cars are handled as their
    /// own eligibility case by the selection policy.
    #[inline]
    pub fn serves(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Motion::Up, Direction::Up) | (Motion::Down, Direction::Down)
        )
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Motion::Idle)
    }

    /// Human-readable label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Idle => "idle",
            Motion::Up   => "moving up",
            Motion::Down => "moving down",
        }
    }
}

impl std::fmt::Display for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
