//! Population lattice representation and generators.
//!
//! # Data layout
//!
//! Cells are stored densely in a row-major `Vec<Option<IndividualState>>` of
//! length `N²`; a position `p` lives at `cells[p.row * N + p.col]`.  Lookups
//! and neighbor scans are therefore plain indexed reads with no hashing.
//!
//! Alongside the cells the lattice keeps `occupied`, the sampled positions
//! in the exact order they were drawn.  The engine walks this list every
//! generation, so its order is part of the determinism contract.  A sampled
//! position that received no individual (rounding remainder of the belief
//! distribution) stays in `occupied` with an empty cell.

use rumor_agent::IndividualState;
use rumor_core::config::{validate_density, validate_size};
use rumor_core::{BeliefDistribution, BeliefLevel, Position, SimRng};

use crate::{LatticeError, LatticeResult};

/// Moore-neighborhood offsets, scanned in this order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// How belief levels are laid out over the sampled positions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Levels assigned to positions in sampling order.
    #[default]
    Random,
    /// Positions sorted row-major, levels banded by `row % 4`.
    Banded,
}

// ── PopulationLattice ─────────────────────────────────────────────────────────

/// An `N×N` grid holding at most one [`IndividualState`] per cell.
///
/// The set of occupied positions is fixed at generation time; only the
/// individuals' states change afterwards.  `Clone` produces a fully
/// independent snapshot, which is how the engine double-buffers generations.
#[derive(Clone, Debug)]
pub struct PopulationLattice {
    size:     usize,
    cells:    Vec<Option<IndividualState>>,
    occupied: Vec<Position>,
}

impl PopulationLattice {
    /// An empty `size × size` lattice.
    fn empty(size: usize, occupied: Vec<Position>) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            occupied,
        }
    }

    // ── Generators ────────────────────────────────────────────────────────

    /// Dispatch to [`generate`](Self::generate) or
    /// [`generate_banded`](Self::generate_banded).
    pub fn generate_with(
        placement:    Placement,
        size:         usize,
        density:      f64,
        distribution: &BeliefDistribution,
        rng:          &mut SimRng,
    ) -> LatticeResult<Self> {
        match placement {
            Placement::Random => Self::generate(size, density, distribution, rng),
            Placement::Banded => Self::generate_banded(size, density, distribution, rng),
        }
    }

    /// Sample `floor(density · N²)` distinct cells and hand them out to belief
    /// levels in the distribution's order, in sampling order.
    pub fn generate(
        size:         usize,
        density:      f64,
        distribution: &BeliefDistribution,
        rng:          &mut SimRng,
    ) -> LatticeResult<Self> {
        let sampled = sample_positions(size, density, rng)?;
        let counts = level_quotas(distribution, sampled.len())?;

        let mut lattice = Self::empty(size, sampled);
        let mut cursor = 0;
        for (level, count) in counts {
            for _ in 0..count {
                let pos = lattice.occupied[cursor];
                lattice.cells[pos.index(size)] = Some(IndividualState::new(level, rng));
                cursor += 1;
            }
        }

        tracing::debug!(
            size,
            sampled = lattice.occupied.len(),
            inhabited = cursor,
            "generated random lattice"
        );
        Ok(lattice)
    }

    /// Reproducible layout: sampled positions are sorted row-major and each
    /// row takes the level at index `row % 4` of the distribution while that
    /// level has quota left, otherwise the first level (in order) that does.
    pub fn generate_banded(
        size:         usize,
        density:      f64,
        distribution: &BeliefDistribution,
        rng:          &mut SimRng,
    ) -> LatticeResult<Self> {
        let mut sampled = sample_positions(size, density, rng)?;
        sampled.sort_unstable();
        let mut quotas = level_quotas(distribution, sampled.len())?;

        let mut lattice = Self::empty(size, sampled);
        let mut inhabited = 0;
        for i in 0..lattice.occupied.len() {
            let pos = lattice.occupied[i];
            let band = pos.row % 4;
            let slot = match quotas.get(band) {
                Some(&(_, left)) if left > 0 => Some(band),
                _ => quotas.iter().position(|&(_, left)| left > 0),
            };
            let Some(slot) = slot else {
                break; // every quota exhausted; remaining cells stay empty
            };
            let (level, left) = &mut quotas[slot];
            *left -= 1;
            lattice.cells[pos.index(size)] = Some(IndividualState::new(*level, rng));
            inhabited += 1;
        }

        tracing::debug!(
            size,
            sampled = lattice.occupied.len(),
            inhabited,
            "generated banded lattice"
        );
        Ok(lattice)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sampled positions, `floor(density · N²)`.
    #[inline]
    pub fn population_size(&self) -> usize {
        self.occupied.len()
    }

    /// Number of cells that actually hold an individual.
    pub fn inhabited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of individuals whose base belief is `level`.
    pub fn level_count(&self, level: BeliefLevel) -> usize {
        self.individuals()
            .filter(|(_, p)| p.base_belief() == level)
            .count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Sampled positions, in sampling order (row-major for banded lattices).
    #[inline]
    pub fn occupied_positions(&self) -> &[Position] {
        &self.occupied
    }

    /// Occupied positions paired with their individuals, in sampling order.
    pub fn individuals(&self) -> impl Iterator<Item = (Position, &IndividualState)> + '_ {
        self.occupied
            .iter()
            .filter_map(|&pos| self.person_at(pos).map(|p| (pos, p)))
    }

    /// The individual at `pos`, or `None` for out-of-range or empty cells.
    #[inline]
    pub fn person_at(&self, pos: Position) -> Option<&IndividualState> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells[pos.index(self.size)].as_ref()
    }

    /// Mutable access to the individual at `pos`.
    ///
    /// Only reachable through a lattice the caller owns; the engine never
    /// hands out `&mut` to its current generation.
    #[inline]
    pub fn person_at_mut(&mut self, pos: Position) -> Option<&mut IndividualState> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells[pos.index(self.size)].as_mut()
    }

    /// In-bounds, inhabited Moore neighbors of `pos`, in
    /// [`NEIGHBOR_OFFSETS`] order.  No wraparound at the edges.
    pub fn neighbors_of(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&n| self.person_at(n).is_some())
            .collect()
    }

    /// Uniform choice among sampled positions that hold an individual.
    /// `None` if the lattice is uninhabited.
    pub fn random_occupied_position(&self, rng: &mut SimRng) -> Option<Position> {
        let inhabited: Vec<Position> = self.individuals().map(|(pos, _)| pos).collect();
        rng.choose(&inhabited).copied()
    }
}

// ── Generation helpers ────────────────────────────────────────────────────────

/// Validate `size`/`density` and draw `floor(density · N²)` distinct
/// positions, uniformly and in random order.
fn sample_positions(size: usize, density: f64, rng: &mut SimRng) -> LatticeResult<Vec<Position>> {
    validate_size(size).map_err(|_| LatticeError::InvalidSize)?;
    validate_density(density).map_err(|_| LatticeError::InvalidDensity(density))?;

    let cells = size * size;
    let amount = ((density * cells as f64).floor() as usize).min(cells);
    Ok(rng
        .sample_indices(cells, amount)
        .into_iter()
        .map(|i| Position::from_index(i, size))
        .collect())
}

/// Per-level individual counts for `available` sampled positions.
fn level_quotas(
    distribution: &BeliefDistribution,
    available:    usize,
) -> LatticeResult<Vec<(BeliefLevel, usize)>> {
    let counts = distribution.counts_for(available);
    let required: usize = counts.iter().map(|&(_, n)| n).sum();
    if required > available {
        return Err(LatticeError::DistributionExceedsPopulation { required, available });
    }
    Ok(counts)
}
