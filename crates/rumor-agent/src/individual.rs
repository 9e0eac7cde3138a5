//! Per-person belief / exposure / cooldown state machine.
//!
//! # Generation protocol
//!
//! The engine drives each individual through the same sequence every
//! generation, always on the *next* snapshot's copy:
//!
//! ```text
//! on_generation_start(rng)            ← once, before any exposure
//! notify_rumor()                      ← once per spreading neighbor
//! notify_spread_occurred(cooldown)    ← on the neighbor that spread
//! ```
//!
//! `should_spread_rumor` is only ever asked of the *previous* snapshot's
//! copy, so an individual's decision for a generation never depends on
//! updates made during that same generation.

use rumor_core::{BeliefLevel, SimRng};

/// State of one occupied lattice cell.
///
/// Fields are private: only the engine's generation step mutates an
/// individual, through the protocol methods below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualState {
    base_belief:       BeliefLevel,
    current_belief:    BeliefLevel,
    /// Generations left before this individual may spread again.
    cooldown:          u32,
    /// Times the rumor reached this individual in the generation under way.
    exposures:         u32,
    has_rumor_now:     bool,
    /// One-way latch.
    ever_exposed:      bool,
    will_spread:       bool,
}

impl IndividualState {
    /// A fresh, never-exposed individual at `level`.
    ///
    /// The first spread decision is drawn immediately so that every
    /// individual consumes the same amount of randomness at creation.
    pub fn new(level: BeliefLevel, rng: &mut SimRng) -> Self {
        Self {
            base_belief:    level,
            current_belief: level,
            cooldown:       0,
            exposures:      0,
            has_rumor_now:  false,
            ever_exposed:   false,
            will_spread:    rng.gen_bool(level.spread_probability()),
        }
    }

    // ── Protocol ──────────────────────────────────────────────────────────

    /// Roll the individual over a generation boundary.
    pub fn on_generation_start(&mut self, rng: &mut SimRng) {
        self.cooldown = self.cooldown.saturating_sub(1);

        if self.exposures == 0 {
            self.has_rumor_now = false;
        } else if self.exposures > 1 {
            // Heard from several neighbors last generation: back to baseline.
            self.current_belief = self.base_belief;
        }

        self.exposures = 0;
        self.will_spread = rng.gen_bool(self.current_belief.spread_probability());
    }

    /// Whether this individual passes the rumor on this generation.
    #[inline]
    pub fn should_spread_rumor(&self) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        self.has_rumor_now && self.will_spread
    }

    /// A neighbor passed the rumor to this individual.
    ///
    /// Returns `true` only for the very first exposure of the individual's
    /// lifetime.  Exposures during cooldown are ignored entirely.
    pub fn notify_rumor(&mut self) -> bool {
        if self.cooldown > 0 {
            return false;
        }

        if self.exposures > 0 {
            self.current_belief = self.base_belief.decreased();
        }

        self.exposures += 1;
        self.has_rumor_now = true;

        let first = !self.ever_exposed;
        self.ever_exposed = true;
        first
    }

    /// This individual just spread; block it for `cooldown_length` generations.
    #[inline]
    pub fn notify_spread_occurred(&mut self, cooldown_length: u32) {
        self.cooldown = cooldown_length;
    }

    /// Make the individual a certain spreader for the generation under way.
    ///
    /// Only used on the seed spreader.  `Believer` spreads with probability
    /// one, so the pending spread decision is settled without a draw.
    pub fn force_optimistic(&mut self) {
        self.current_belief = BeliefLevel::Believer;
        self.will_spread = true;
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn base_belief(&self) -> BeliefLevel {
        self.base_belief
    }

    #[inline]
    pub fn current_belief(&self) -> BeliefLevel {
        self.current_belief
    }

    #[inline]
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    #[inline]
    pub fn exposures_this_generation(&self) -> u32 {
        self.exposures
    }

    #[inline]
    pub fn has_rumor_now(&self) -> bool {
        self.has_rumor_now
    }

    #[inline]
    pub fn ever_exposed(&self) -> bool {
        self.ever_exposed
    }

    #[inline]
    pub fn will_spread_this_generation(&self) -> bool {
        self.will_spread
    }
}
