//! Fluent builder for constructing a [`DiffusionEngine`].

use rumor_core::{DiffusionConfig, Generation, Position, SimRng, derive_seed};
use rumor_lattice::{Placement, PopulationLattice};

use crate::{DiffusionEngine, SimError, SimResult};

/// Fluent builder for [`DiffusionEngine`].
///
/// # Required inputs
///
/// - [`DiffusionConfig`]: lattice size, density, cooldown, belief distribution
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                               |
/// |--------------------------|---------------------------------------|
/// | `.rng_seed(s)`           | `0`                                   |
/// | `.placement(p)`          | `Placement::Random`                   |
/// | `.initial_spreader(pos)` | uniform random inhabited position     |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(config)
///     .rng_seed(7)
///     .initial_spreader(Position::new(1, 1))
///     .build()?;
/// ```
pub struct EngineBuilder {
    config:           DiffusionConfig,
    rng_seed:         u64,
    replica:          u64,
    placement:        Placement,
    initial_spreader: Option<Position>,
}

impl EngineBuilder {
    pub fn new(config: DiffusionConfig) -> Self {
        Self {
            config,
            rng_seed:         0,
            replica:          0,
            placement:        Placement::Random,
            initial_spreader: None,
        }
    }

    /// Root seed for the engine's random source.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Replica index under the root seed; replica `k` draws from
    /// `derive_seed(rng_seed, k)`.
    pub(crate) fn replica(mut self, replica: u64) -> Self {
        self.replica = replica;
        self
    }

    /// How belief levels are laid out on the lattice.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Force the seed spreader onto `pos` instead of drawing it at random.
    ///
    /// `pos` must hold an individual once the lattice is generated.
    pub fn initial_spreader(mut self, pos: Position) -> Self {
        self.initial_spreader = Some(pos);
        self
    }

    /// Validate the configuration, generate the lattice, seed one spreader,
    /// and return an engine at generation 0.
    pub fn build(self) -> SimResult<DiffusionEngine> {
        self.config.validate()?;

        let mut rng = SimRng::new(derive_seed(self.rng_seed, self.replica));
        let mut lattice = PopulationLattice::generate_with(
            self.placement,
            self.config.size,
            self.config.density,
            &self.config.distribution,
            &mut rng,
        )?;

        if lattice.inhabited_count() == 0 {
            return Err(SimError::EmptyPopulation);
        }
        let spreader = match self.initial_spreader {
            Some(pos) => pos,
            None => lattice
                .random_occupied_position(&mut rng)
                .ok_or(SimError::EmptyPopulation)?,
        };
        let root = lattice
            .person_at_mut(spreader)
            .ok_or(SimError::SpreaderNotInhabited(spreader))?;
        root.notify_rumor();
        root.force_optimistic();

        tracing::info!(
            size       = self.config.size,
            population = lattice.population_size(),
            inhabited  = lattice.inhabited_count(),
            seed       = self.rng_seed,
            replica    = self.replica,
            %spreader,
            "diffusion engine ready"
        );

        Ok(DiffusionEngine {
            config:               self.config,
            placement:            self.placement,
            lattice,
            rng,
            rng_seed:             self.rng_seed,
            replica:              self.replica,
            generation:           Generation::ZERO,
            cumulative_exposures: 1,
            history:              vec![1],
        })
    }
}
