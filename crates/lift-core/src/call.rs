//! Hall-call vocabulary: travel direction and the call itself.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction a waiting passenger wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse a textual direction.  Accepts exactly `"up"` and `"down"`
    /// (case-insensitive, surrounding whitespace ignored); anything else
    /// yields `None`.
    ///
    /// This is the boundary where free-text input is rejected — once a
    /// `Direction` value exists, an invalid direction is unrepresentable.
    pub fn parse(s: &str) -> Option<Direction> {
        match s.trim() {
            t if t.eq_ignore_ascii_case("up") => Some(Direction::Up),
            t if t.eq_ignore_ascii_case("down") => Some(Direction::Down),
            _ => None,
        }
    }

    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HallCall ──────────────────────────────────────────────────────────────────

/// A request for service at a floor with an intended travel direction.
///
/// Floors are 1-based; whether `floor` is inside the building is checked by
/// the fleet at dispatch time, not here, so a `HallCall` can carry whatever
/// a call button (or a test) produced.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallCall {
    pub floor:     u8,
    pub direction: Direction,
}

impl HallCall {
    #[inline]
    pub fn new(floor: u8, direction: Direction) -> Self {
        Self { floor, direction }
    }
}

impl fmt::Display for HallCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} {}", self.floor, self.direction)
    }
}
