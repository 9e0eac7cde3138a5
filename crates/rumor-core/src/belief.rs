//! Belief levels and the population's belief distribution.
//!
//! All variants are always compiled in.  The distribution is an explicit
//! ordered list rather than a map: lattice generation hands out sampled
//! positions level by level in list order, so the order is part of the
//! reproducibility contract.

use crate::{RumorError, RumorResult};

/// How far [`BeliefDistribution`] fractions may sum away from `1.0`.
pub const DISTRIBUTION_TOLERANCE: f64 = 0.01;

// ── BeliefLevel ───────────────────────────────────────────────────────────────

/// A person's propensity to believe and pass on the rumor.
///
/// Ordered from most- to least-believing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeliefLevel {
    /// Believes everything; always spreads.
    Believer,
    Moderate,
    Skeptic,
    /// Believes nothing; never spreads on its own.
    Denier,
}

impl BeliefLevel {
    /// All levels, most-believing first.
    pub const ALL: [BeliefLevel; 4] = [
        BeliefLevel::Believer,
        BeliefLevel::Moderate,
        BeliefLevel::Skeptic,
        BeliefLevel::Denier,
    ];

    /// Probability of spreading in a generation while holding the rumor.
    #[inline]
    pub fn spread_probability(self) -> f64 {
        match self {
            BeliefLevel::Believer => 1.0,
            BeliefLevel::Moderate => 0.5,
            BeliefLevel::Skeptic  => 1.0 / 3.0,
            BeliefLevel::Denier   => 0.0,
        }
    }

    /// One step toward `Believer`.  `Believer` is absorbing.
    #[inline]
    pub fn decreased(self) -> BeliefLevel {
        match self {
            BeliefLevel::Believer | BeliefLevel::Moderate => BeliefLevel::Believer,
            BeliefLevel::Skeptic => BeliefLevel::Moderate,
            BeliefLevel::Denier  => BeliefLevel::Skeptic,
        }
    }

    /// Human-readable label, useful for reports and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            BeliefLevel::Believer => "believer",
            BeliefLevel::Moderate => "moderate",
            BeliefLevel::Skeptic  => "skeptic",
            BeliefLevel::Denier   => "denier",
        }
    }
}

impl std::fmt::Display for BeliefLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BeliefDistribution ────────────────────────────────────────────────────────

/// Ordered mapping of belief levels to target population fractions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeliefDistribution {
    entries: Vec<(BeliefLevel, f64)>,
}

impl BeliefDistribution {
    /// Validate and wrap an ordered list of `(level, fraction)` pairs.
    ///
    /// Fails if the list is empty, a level repeats, a fraction is not a
    /// finite value in `[0, 1]`, or the fractions sum further than
    /// [`DISTRIBUTION_TOLERANCE`] from `1.0`.
    pub fn new(entries: Vec<(BeliefLevel, f64)>) -> RumorResult<Self> {
        if entries.is_empty() {
            return Err(RumorError::Config("belief distribution is empty".into()));
        }
        for (i, &(level, fraction)) in entries.iter().enumerate() {
            if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
                return Err(RumorError::Config(format!(
                    "fraction {fraction} for {level} is outside [0, 1]"
                )));
            }
            if entries[..i].iter().any(|&(seen, _)| seen == level) {
                return Err(RumorError::Config(format!(
                    "belief level {level} appears more than once"
                )));
            }
        }
        let sum: f64 = entries.iter().map(|&(_, f)| f).sum();
        if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(RumorError::Config(format!(
                "belief fractions sum to {sum:.4}, expected 1"
            )));
        }
        Ok(Self { entries })
    }

    /// Equal shares of all four levels, most-believing first.
    pub fn uniform() -> Self {
        Self {
            entries: BeliefLevel::ALL.iter().map(|&l| (l, 0.25)).collect(),
        }
    }

    /// The whole population at a single level.
    pub fn only(level: BeliefLevel) -> Self {
        Self { entries: vec![(level, 1.0)] }
    }

    /// Pair the four levels (most-believing first) with `fractions`.
    pub fn from_fractions(fractions: [f64; 4]) -> RumorResult<Self> {
        Self::new(BeliefLevel::ALL.into_iter().zip(fractions).collect())
    }

    pub fn entries(&self) -> &[(BeliefLevel, f64)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (BeliefLevel, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target number of individuals per level for a population of
    /// `population`, truncated toward zero, in list order.
    pub fn counts_for(&self, population: usize) -> Vec<(BeliefLevel, usize)> {
        self.entries
            .iter()
            .map(|&(level, fraction)| (level, (fraction * population as f64).floor() as usize))
            .collect()
    }
}

impl Default for BeliefDistribution {
    fn default() -> Self {
        Self::uniform()
    }
}
