use rumor_core::{Position, RumorError};
use rumor_lattice::LatticeError;
use thiserror::Error;

/// Construction-time failures.  A successfully built engine never errors
/// while stepping.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] RumorError),

    #[error("lattice generation failed: {0}")]
    Lattice(#[from] LatticeError),

    #[error("population is empty; no individual can seed the rumor")]
    EmptyPopulation,

    #[error("initial spreader {0} is not an inhabited cell")]
    SpreaderNotInhabited(Position),

    #[error("trial plan must request at least one trial")]
    NoTrials,
}

pub type SimResult<T> = Result<T, SimError>;
