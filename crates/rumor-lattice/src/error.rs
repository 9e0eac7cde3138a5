//! Lattice-generation error type.

use thiserror::Error;

use rumor_core::RumorError;

/// Errors produced while generating a [`PopulationLattice`](crate::PopulationLattice).
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("lattice size must be positive")]
    InvalidSize,

    #[error("density {0} is outside (0, 1]")]
    InvalidDensity(f64),

    #[error("belief distribution needs {required} individuals but only {available} positions were sampled")]
    DistributionExceedsPopulation { required: usize, available: usize },

    #[error(transparent)]
    Config(#[from] RumorError),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
