//! Simulation time model.
//!
//! Time is a monotonically increasing `Generation` counter.  One generation
//! is one synchronous tick: every individual is re-evaluated against the
//! previous generation's snapshot.

use std::fmt;

/// An absolute generation counter.  Generation 0 is the seeded initial state.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub const ZERO: Generation = Generation(0);

    /// The generation after `self`.
    #[inline]
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
