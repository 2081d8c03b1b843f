//! Strongly typed, zero-cost car identifier.
//!
//! The inner integer is `pub` to allow direct indexing into the fleet's
//! `Vec<Car>` via `id.0 as usize`, but callers should prefer the `.index()`
//! helper for clarity.

use std::fmt;

/// Index of a car within its fleet.  Stable for the life of the fleet;
/// fleet membership never changes after construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarId(pub u16);

impl CarId {
    /// Sentinel meaning "no valid ID" — equivalent to `u16::MAX`.
    pub const INVALID: CarId = CarId(u16::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for CarId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarId({})", self.0)
    }
}

impl From<CarId> for usize {
    #[inline(always)]
    fn from(id: CarId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for CarId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<CarId, Self::Error> {
        u16::try_from(n).map(CarId)
    }
}
