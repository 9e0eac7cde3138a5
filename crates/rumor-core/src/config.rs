//! Top-level simulation configuration.

use crate::{BeliefDistribution, RumorError, RumorResult};

/// Everything an external launcher supplies to build a diffusion engine.
///
/// Typically filled from command-line arguments by the application crate and
/// passed to `rumor_sim::EngineBuilder`.  Defaults match a 100×100 lattice at
/// 80 % density, 5-generation cooldown, uniform beliefs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusionConfig {
    /// Lattice side length `N` (the lattice has `N²` cells).
    pub size: usize,

    /// Fraction of cells to populate, in `(0, 1]`.
    pub density: f64,

    /// Generations a spreader must wait before it may spread again.
    pub cooldown: u32,

    /// Ordered belief-level fractions.
    pub distribution: BeliefDistribution,
}

impl DiffusionConfig {
    /// Eagerly check every field.  Nothing is clamped.
    pub fn validate(&self) -> RumorResult<()> {
        validate_size(self.size)?;
        validate_density(self.density)?;
        // Re-run distribution checks: a deserialized config bypasses `new`.
        BeliefDistribution::new(self.distribution.entries().to_vec())?;
        Ok(())
    }
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            size:         100,
            density:      0.8,
            cooldown:     5,
            distribution: BeliefDistribution::uniform(),
        }
    }
}

/// Lattice side must be positive and `size²` must fit in a `usize`.
pub fn validate_size(size: usize) -> RumorResult<()> {
    if size == 0 {
        return Err(RumorError::Config("lattice size must be positive".into()));
    }
    if size.checked_mul(size).is_none() {
        return Err(RumorError::Config(format!(
            "lattice size {size} overflows the cell count"
        )));
    }
    Ok(())
}

/// Density must lie in `(0, 1]`; NaN is rejected.
pub fn validate_density(density: f64) -> RumorResult<()> {
    if !(density > 0.0 && density <= 1.0) {
        return Err(RumorError::Config(format!(
            "density {density} is outside (0, 1]"
        )));
    }
    Ok(())
}
