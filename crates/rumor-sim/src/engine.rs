//! The `DiffusionEngine` struct and its generation loop.

use rumor_agent::IndividualState;
use rumor_core::{DiffusionConfig, Generation, SimRng};
use rumor_lattice::{Placement, PopulationLattice};

use crate::{EngineBuilder, GenerationObserver, SimResult};

/// Drives a [`PopulationLattice`] through synchronous generations.
///
/// The engine owns the only copy of the current generation and exposes it
/// by shared reference.  [`step_generation`](Self::step_generation),
/// [`jump_generations`](Self::jump_generations), and
/// [`run_generations`](Self::run_generations) are the only mutating entry
/// points.
///
/// Create via [`EngineBuilder`] or [`DiffusionEngine::new`].
pub struct DiffusionEngine {
    pub(crate) config:               DiffusionConfig,
    pub(crate) placement:            Placement,
    pub(crate) lattice:              PopulationLattice,
    pub(crate) rng:                  SimRng,
    pub(crate) rng_seed:             u64,
    pub(crate) replica:              u64,
    pub(crate) generation:           Generation,
    /// Individuals ever exposed, the seed included.
    pub(crate) cumulative_exposures: usize,
    /// Newly exposed individuals per generation; `history[0] == 1` (the seed).
    pub(crate) history:              Vec<usize>,
}

impl DiffusionEngine {
    /// Build an engine with default placement and a random seed spreader.
    pub fn new(config: DiffusionConfig, rng_seed: u64) -> SimResult<Self> {
        EngineBuilder::new(config).rng_seed(rng_seed).build()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one generation.  Returns the number of individuals exposed
    /// for the first time in it.
    pub fn step_generation(&mut self) -> usize {
        let current = &self.lattice;
        let mut next = current.clone();
        let cooldown = self.config.cooldown;
        let mut newly_exposed = 0;

        for &pos in current.occupied_positions() {
            let Some(person) = next.person_at_mut(pos) else {
                continue;
            };
            person.on_generation_start(&mut self.rng);

            for friend in current.neighbors_of(pos) {
                let spreads = current
                    .person_at(friend)
                    .is_some_and(IndividualState::should_spread_rumor);
                if !spreads {
                    continue;
                }
                if next.person_at_mut(pos).is_some_and(IndividualState::notify_rumor) {
                    newly_exposed += 1;
                }
                if let Some(spreader) = next.person_at_mut(friend) {
                    spreader.notify_spread_occurred(cooldown);
                }
            }
        }

        self.lattice = next;
        self.history.push(newly_exposed);
        self.generation = self.generation.next();
        self.cumulative_exposures += newly_exposed;

        tracing::debug!(
            generation = self.generation.0,
            newly_exposed,
            cumulative = self.cumulative_exposures,
            "generation committed"
        );
        newly_exposed
    }

    /// Advance exactly `steps` generations, sequentially, without early exit.
    pub fn jump_generations(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step_generation();
        }
    }

    /// Advance `steps` generations, reporting each boundary to `observer`.
    pub fn run_generations<O: GenerationObserver>(&mut self, steps: u64, observer: &mut O) {
        for _ in 0..steps {
            observer.on_generation_start(self.generation.next());
            let newly_exposed = self.step_generation();
            observer.on_generation_end(self.generation, newly_exposed, &self.lattice);
        }
        observer.on_run_end(self.generation);
    }

    /// A fresh engine with the same configuration and placement, seeded as
    /// the next replica under this engine's root seed.
    ///
    /// The receiver is left untouched; replicating a replica yields yet
    /// another independent seed.
    pub fn replicate(&self) -> SimResult<Self> {
        EngineBuilder::new(self.config.clone())
            .rng_seed(self.rng_seed)
            .replica(self.replica + 1)
            .placement(self.placement)
            .build()
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &DiffusionConfig {
        &self.config
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn lattice(&self) -> &PopulationLattice {
        &self.lattice
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    pub fn replica(&self) -> u64 {
        self.replica
    }

    pub fn population_size(&self) -> usize {
        self.lattice.population_size()
    }

    /// Individuals ever exposed, the seed spreader included.
    pub fn cumulative_exposures(&self) -> usize {
        self.cumulative_exposures
    }

    /// Share of the population ever exposed, in `[0, 1]`.
    pub fn rumor_relative(&self) -> f64 {
        self.cumulative_exposures as f64 / self.population_size() as f64
    }

    /// Newly exposed count per generation, indexed by generation number.
    pub fn rumors_spread_count(&self) -> &[usize] {
        &self.history
    }
}
