//! `rumor-lattice`: the population lattice.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`lattice`] | `PopulationLattice`, `Placement`, `NEIGHBOR_OFFSETS`        |
//! | [`error`]   | `LatticeError`, `LatticeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to core and agent types.            |

pub mod error;
pub mod lattice;


pub use error::{LatticeError, LatticeResult};
pub use lattice::{NEIGHBOR_OFFSETS, Placement, PopulationLattice};
