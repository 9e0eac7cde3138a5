//! `rumor-sim`: generation stepping engine for the rumor diffusion simulator.
//!
//! # Double-buffered generation step
//!
//! ```text
//! next = clone(current)
//! for p in current.occupied_positions():        (sampling order)
//!   ① next[p].on_generation_start(rng)
//!   ② for q in current.neighbors_of(p):
//!        if current[q].should_spread_rumor():
//!          next[p].notify_rumor()               → count first exposures
//!          next[q].notify_spread_occurred(L)    → spreader cools down
//! current = next;  history.push(count);  generation += 1
//! ```
//!
//! Every decision reads `current` only and every write lands in `next`, so
//! who hears the rumor in a generation does not depend on processing order.
//! A spreader's own cooldown does: if it is processed after every neighbor
//! it reached, its decrement in ① lands after the last reset in ② and it ends
//! the generation at `L - 1` instead of `L`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs independent trials on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rumor_core::DiffusionConfig;
//! use rumor_sim::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new(DiffusionConfig::default())
//!     .rng_seed(42)
//!     .build()?;
//! engine.jump_generations(60);
//! println!("reached {:.1} %", engine.rumor_relative() * 100.0);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod trials;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::DiffusionEngine;
pub use error::{SimError, SimResult};
pub use observer::GenerationObserver;
pub use trials::{TrialPlan, TrialSummary, run_trials};
