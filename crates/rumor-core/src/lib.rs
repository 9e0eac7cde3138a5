//! `rumor-core`: foundational types for the rumor diffusion simulator.
//!
//! This crate is a dependency of every other `rumor-*` crate.  It has no
//! `rumor-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`position`]    | `Position` lattice coordinate                         |
//! | [`generation`]  | `Generation` counter                                  |
//! | [`belief`]      | `BeliefLevel`, `BeliefDistribution`                   |
//! | [`config`]      | `DiffusionConfig`                                     |
//! | [`rng`]         | `SimRng` (injectable, seedable)                       |
//! | [`error`]       | `RumorError`, `RumorResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.  |

pub mod belief;
pub mod config;
pub mod error;
pub mod generation;
pub mod position;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use belief::{BeliefDistribution, BeliefLevel};
pub use config::DiffusionConfig;
pub use error::{RumorError, RumorResult};
pub use generation::Generation;
pub use position::Position;
pub use rng::{SimRng, derive_seed};
