//! Integration tests for rumor-sim.

use std::collections::BTreeSet;

use rumor_core::{BeliefDistribution, BeliefLevel, DiffusionConfig, Generation, Position};
use rumor_lattice::{Placement, PopulationLattice};

use crate::{DiffusionEngine, EngineBuilder, GenerationObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Full lattice of believers.
fn believers(size: usize, cooldown: u32) -> DiffusionConfig {
    DiffusionConfig {
        size,
        density: 1.0,
        cooldown,
        distribution: BeliefDistribution::only(BeliefLevel::Believer),
    }
}

fn mixed_config() -> DiffusionConfig {
    DiffusionConfig {
        size:         20,
        density:      0.8,
        cooldown:     2,
        distribution: BeliefDistribution::uniform(),
    }
}

/// Row-major processing order with the seed forced at `pos`.
fn seeded_at(config: DiffusionConfig, pos: Position) -> DiffusionEngine {
    EngineBuilder::new(config)
        .rng_seed(1)
        .placement(Placement::Banded)
        .initial_spreader(pos)
        .build()
        .unwrap()
}

fn exposed_set(lattice: &PopulationLattice) -> BTreeSet<Position> {
    lattice
        .individuals()
        .filter(|(_, p)| p.ever_exposed())
        .map(|(pos, _)| pos)
        .collect()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod build_tests {
    use super::*;

    #[test]
    fn generation_zero_has_single_seed() {
        let engine = DiffusionEngine::new(mixed_config(), 3).unwrap();
        assert_eq!(engine.generation(), Generation::ZERO);
        assert_eq!(engine.rumors_spread_count(), &[1]);
        assert_eq!(engine.cumulative_exposures(), 1);

        let exposed: Vec<_> = engine
            .lattice()
            .individuals()
            .filter(|(_, p)| p.ever_exposed())
            .collect();
        assert_eq!(exposed.len(), 1);
        let (_, seed) = exposed[0];
        assert_eq!(seed.current_belief(), BeliefLevel::Believer);
        assert!(seed.has_rumor_now());
        assert!(seed.should_spread_rumor());
    }

    #[test]
    fn config_echo() {
        let config = mixed_config();
        let engine = DiffusionEngine::new(config.clone(), 3).unwrap();
        assert_eq!(engine.config(), &config);
        assert_eq!(engine.population_size(), 320);
        assert_eq!(engine.lattice().size(), 20);
    }

    #[test]
    fn zero_density_is_config_error() {
        let config = DiffusionConfig { density: 0.0, ..mixed_config() };
        let result = DiffusionEngine::new(config, 0);
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn overflowing_size_is_config_error() {
        let config = DiffusionConfig {
            size: 1usize << (usize::BITS / 2),
            density: 0.5,
            ..mixed_config()
        };
        assert!(matches!(
            DiffusionEngine::new(config, 0),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn uninhabited_lattice_is_rejected() {
        // One cell, uniform quarters → every level floors to zero individuals.
        let config = DiffusionConfig {
            size:         1,
            density:      1.0,
            cooldown:     0,
            distribution: BeliefDistribution::uniform(),
        };
        assert!(matches!(
            DiffusionEngine::new(config, 0),
            Err(SimError::EmptyPopulation)
        ));
    }

    #[test]
    fn spreader_must_be_inhabited() {
        let result = EngineBuilder::new(believers(3, 0))
            .initial_spreader(Position::new(5, 5))
            .build();
        assert!(matches!(result, Err(SimError::SpreaderNotInhabited(_))));
    }

    #[test]
    fn bad_distribution_surfaces_as_lattice_error() {
        let config = DiffusionConfig {
            size:         20,
            density:      1.0,
            cooldown:     0,
            distribution: BeliefDistribution::new(vec![
                (BeliefLevel::Believer, 1.0),
                (BeliefLevel::Moderate, 0.005),
            ])
            .unwrap(),
        };
        assert!(matches!(
            DiffusionEngine::new(config, 0),
            Err(SimError::Lattice(_))
        ));
    }
}

// ── Stepping scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn center_seed_reaches_all_eight_neighbors() {
        let center = Position::new(1, 1);
        let mut engine = seeded_at(believers(3, 0), center);
        assert_eq!(engine.population_size(), 9);

        let newly = engine.step_generation();
        assert_eq!(newly, 8);
        assert_eq!(engine.rumors_spread_count(), &[1, 8]);
        assert_eq!(engine.generation(), Generation(1));
        assert_eq!(engine.cumulative_exposures(), 9);
        assert_eq!(engine.rumor_relative(), 1.0);

        for pos in engine.lattice().neighbors_of(center) {
            let p = engine.lattice().person_at(pos).unwrap();
            assert!(p.ever_exposed(), "{pos}");
            assert!(p.has_rumor_now(), "{pos}");
        }
    }

    #[test]
    fn spreader_cools_down() {
        // Row-major order: the center is not last, so it ends generation 1 at L.
        let center = Position::new(1, 1);
        let mut engine = seeded_at(believers(3, 5), center);
        engine.step_generation();

        for expected in (1..=5).rev() {
            let p = engine.lattice().person_at(center).unwrap();
            assert_eq!(p.cooldown(), expected);
            assert!(!p.should_spread_rumor(), "spread with cooldown {expected}");
            engine.step_generation();
        }
        assert_eq!(engine.lattice().person_at(center).unwrap().cooldown(), 0);
    }

    #[test]
    fn spreader_processed_last_keeps_its_decrement() {
        // The seed's own generation-start decrement runs at its turn in
        // sampling order; resets from neighbors processed later overwrite it.
        let center = Position::new(1, 1);
        for seed in 0..200 {
            let mut engine = EngineBuilder::new(believers(3, 5))
                .rng_seed(seed)
                .initial_spreader(center)
                .build()
                .unwrap();
            let center_is_last = engine.lattice().occupied_positions().last() == Some(&center);
            engine.step_generation();

            let cooldown = engine.lattice().person_at(center).unwrap().cooldown();
            let expected = if center_is_last { 4 } else { 5 };
            assert_eq!(cooldown, expected, "seed {seed}");
        }
    }

    #[test]
    fn one_generation_moves_one_ring() {
        // Writes land in the next snapshot only, so the rumor cannot travel
        // further than one cell per generation whatever the processing order.
        let center = Position::new(2, 2);
        let mut engine = seeded_at(believers(5, 0), center);
        engine.step_generation();

        let exposed = exposed_set(engine.lattice());
        assert_eq!(exposed.len(), 9);
        for pos in exposed {
            assert!(pos.row.abs_diff(2) <= 1 && pos.col.abs_diff(2) <= 1, "{pos}");
        }

        engine.step_generation();
        assert_eq!(engine.rumors_spread_count(), &[1, 8, 16]);
    }

    #[test]
    fn random_order_gives_same_ring() {
        let mut engine = EngineBuilder::new(believers(5, 0))
            .rng_seed(77)
            .initial_spreader(Position::new(2, 2))
            .build()
            .unwrap();
        engine.step_generation();
        assert_eq!(engine.rumors_spread_count(), &[1, 8]);
    }

    #[test]
    fn jump_matches_repeated_steps() {
        let mut a = DiffusionEngine::new(mixed_config(), 21).unwrap();
        let mut b = DiffusionEngine::new(mixed_config(), 21).unwrap();
        a.jump_generations(12);
        for _ in 0..12 {
            b.step_generation();
        }
        assert_eq!(a.generation(), Generation(12));
        assert_eq!(a.rumors_spread_count(), b.rumors_spread_count());
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn exposure_is_monotonic_and_bounded() {
        let mut engine = DiffusionEngine::new(mixed_config(), 8).unwrap();
        let population = engine.population_size();
        let mut previous = exposed_set(engine.lattice());

        for _ in 0..40 {
            engine.step_generation();
            let current = exposed_set(engine.lattice());
            assert!(previous.is_subset(&current), "ever_exposed reverted");
            assert_eq!(current.len(), engine.cumulative_exposures());
            assert!(engine.cumulative_exposures() <= population);
            let relative = engine.rumor_relative();
            assert!((0.0..=1.0).contains(&relative));
            previous = current;
        }

        let history = engine.rumors_spread_count();
        assert_eq!(history.len(), 41);
        assert_eq!(history[0], 1);
        assert_eq!(history.iter().sum::<usize>(), engine.cumulative_exposures());
    }

    #[test]
    fn same_seed_same_history() {
        let mut a = DiffusionEngine::new(mixed_config(), 11).unwrap();
        let mut b = DiffusionEngine::new(mixed_config(), 11).unwrap();
        a.jump_generations(25);
        b.jump_generations(25);
        assert_eq!(a.rumors_spread_count(), b.rumors_spread_count());
        for &pos in a.lattice().occupied_positions() {
            assert_eq!(a.lattice().person_at(pos), b.lattice().person_at(pos));
        }
    }

    #[test]
    fn occupied_positions_fixed_across_generations() {
        let mut engine = DiffusionEngine::new(mixed_config(), 2).unwrap();
        let before = engine.lattice().occupied_positions().to_vec();
        engine.jump_generations(5);
        assert_eq!(engine.lattice().occupied_positions(), before.as_slice());
    }
}

// ── Replicas and observers ────────────────────────────────────────────────────

#[cfg(test)]
mod replicate_tests {
    use super::*;

    #[test]
    fn replicate_leaves_receiver_untouched() {
        let mut engine = DiffusionEngine::new(mixed_config(), 5).unwrap();
        engine.jump_generations(3);
        let history = engine.rumors_spread_count().to_vec();

        let replica = engine.replicate().unwrap();
        assert_eq!(engine.generation(), Generation(3));
        assert_eq!(engine.rumors_spread_count(), history.as_slice());

        assert_eq!(replica.generation(), Generation::ZERO);
        assert_eq!(replica.rumors_spread_count(), &[1]);
        assert_eq!(replica.config(), engine.config());
        assert_eq!(replica.replica(), 1);
        assert_ne!(
            replica.lattice().occupied_positions(),
            engine.lattice().occupied_positions()
        );
    }

    #[test]
    fn chained_replicas_are_distinct() {
        let engine = DiffusionEngine::new(mixed_config(), 5).unwrap();
        let first = engine.replicate().unwrap();
        let second = first.replicate().unwrap();
        assert_eq!(second.replica(), 2);
        assert_ne!(
            first.lattice().occupied_positions(),
            second.lattice().occupied_positions()
        );
        // Replicating the same engine twice is deterministic.
        let again = engine.replicate().unwrap();
        assert_eq!(
            again.lattice().occupied_positions(),
            first.lattice().occupied_positions()
        );
    }

    #[test]
    fn replicate_keeps_placement() {
        let engine = EngineBuilder::new(mixed_config())
            .placement(Placement::Banded)
            .build()
            .unwrap();
        let replica = engine.replicate().unwrap();
        assert_eq!(replica.placement(), Placement::Banded);
        let positions = replica.lattice().occupied_positions();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    struct Recorder {
        starts: Vec<Generation>,
        newly:  Vec<usize>,
        ended:  Option<Generation>,
    }

    impl GenerationObserver for Recorder {
        fn on_generation_start(&mut self, generation: Generation) {
            self.starts.push(generation);
        }
        fn on_generation_end(&mut self, _g: Generation, newly: usize, _l: &PopulationLattice) {
            self.newly.push(newly);
        }
        fn on_run_end(&mut self, final_generation: Generation) {
            self.ended = Some(final_generation);
        }
    }

    #[test]
    fn observer_sees_every_boundary() {
        let mut engine = DiffusionEngine::new(mixed_config(), 4).unwrap();
        let mut rec = Recorder { starts: vec![], newly: vec![], ended: None };
        engine.run_generations(4, &mut rec);

        assert_eq!(rec.starts, vec![Generation(1), Generation(2), Generation(3), Generation(4)]);
        assert_eq!(rec.newly.as_slice(), &engine.rumors_spread_count()[1..]);
        assert_eq!(rec.ended, Some(Generation(4)));
    }
}

// ── Trials ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trial_tests {
    use super::*;
    use crate::{TrialPlan, run_trials};

    fn plan(trials: usize) -> TrialPlan {
        TrialPlan { trials, generations: 10, rng_seed: 9, placement: Placement::Random }
    }

    #[test]
    fn single_trial_matches_engine() {
        let summary = run_trials(&mixed_config(), &plan(1)).unwrap();
        let mut engine = DiffusionEngine::new(mixed_config(), 9).unwrap();
        engine.jump_generations(10);

        let expected: Vec<f64> = engine.rumors_spread_count().iter().map(|&n| n as f64).collect();
        assert_eq!(summary.mean_history, expected);
        assert_eq!(summary.final_relative, vec![engine.rumor_relative()]);
    }

    #[test]
    fn trials_agree_with_replicate_chain() {
        let summary = run_trials(&mixed_config(), &plan(2)).unwrap();
        let mut first = DiffusionEngine::new(mixed_config(), 9).unwrap();
        let mut second = first.replicate().unwrap();
        first.jump_generations(10);
        second.jump_generations(10);

        let expected: Vec<f64> = first
            .rumors_spread_count()
            .iter()
            .zip(second.rumors_spread_count())
            .map(|(&a, &b)| (a + b) as f64 / 2.0)
            .collect();
        assert_eq!(summary.mean_history, expected);
        assert_eq!(summary.final_relative, vec![first.rumor_relative(), second.rumor_relative()]);
    }

    #[test]
    fn summary_shape() {
        let summary = run_trials(&mixed_config(), &plan(3)).unwrap();
        assert_eq!(summary.trials, 3);
        assert_eq!(summary.mean_history.len(), 11);
        assert_eq!(summary.mean_history[0], 1.0);
        assert_eq!(summary.final_relative.len(), 3);
        let mean = summary.mean_rumor_relative();
        assert!((0.0..=1.0).contains(&mean));

        let cumulative = summary.mean_cumulative();
        assert_eq!(cumulative.len(), 11);
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(matches!(
            run_trials(&mixed_config(), &plan(0)),
            Err(SimError::NoTrials)
        ));
    }
}
