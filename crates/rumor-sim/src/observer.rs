//! Generation observer trait for progress reporting and data collection.

use rumor_core::Generation;
use rumor_lattice::PopulationLattice;

/// Callbacks invoked by [`DiffusionEngine::run_generations`][crate::DiffusionEngine::run_generations]
/// at generation boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl GenerationObserver for ProgressPrinter {
///     fn on_generation_end(&mut self, g: Generation, newly: usize, _: &PopulationLattice) {
///         println!("{g}: {newly} newly exposed");
///     }
/// }
/// ```
pub trait GenerationObserver {
    /// Called before generation `generation` is computed from its predecessor.
    fn on_generation_start(&mut self, _generation: Generation) {}

    /// Called once `generation` has been committed.
    ///
    /// `newly_exposed` counts individuals who heard the rumor for the first
    /// time during this generation; `lattice` is the committed snapshot.
    fn on_generation_end(
        &mut self,
        _generation:    Generation,
        _newly_exposed: usize,
        _lattice:       &PopulationLattice,
    ) {}

    /// Called once after the last requested generation.
    fn on_run_end(&mut self, _final_generation: Generation) {}
}
