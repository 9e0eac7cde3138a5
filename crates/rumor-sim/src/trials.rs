//! Repeated independent trials with averaged spread histories.
//!
//! Trial `k` is exactly the engine `replicate` would produce as replica `k`
//! of a root engine seeded with `plan.rng_seed`, so a sequential chain of
//! `replicate` calls and this runner agree generation for generation.  With
//! the `parallel` feature trials run on Rayon; since every trial owns its
//! engine and RNG, the results do not depend on scheduling.

use rumor_core::DiffusionConfig;
use rumor_lattice::Placement;

use crate::{EngineBuilder, SimError, SimResult};

/// What to run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialPlan {
    /// Number of independent engines.  Must be at least 1.
    pub trials:      usize,
    /// Generations to advance each engine.
    pub generations: u64,
    /// Root seed; trial `k` uses replica `k` under it.
    pub rng_seed:    u64,
    pub placement:   Placement,
}

/// Aggregated trial results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    pub trials:         usize,
    pub generations:    u64,
    /// Mean newly-exposed count per generation; length `generations + 1`.
    pub mean_history:   Vec<f64>,
    /// Final `rumor_relative` of each trial, in trial order.
    pub final_relative: Vec<f64>,
}

impl TrialSummary {
    /// Mean of the per-trial final `rumor_relative`.
    pub fn mean_rumor_relative(&self) -> f64 {
        self.final_relative.iter().sum::<f64>() / self.final_relative.len() as f64
    }

    /// Running total of `mean_history`: expected exposed count by generation.
    pub fn mean_cumulative(&self) -> Vec<f64> {
        self.mean_history
            .iter()
            .scan(0.0, |acc, &x| {
                *acc += x;
                Some(*acc)
            })
            .collect()
    }
}

/// One trial's outcome: spread history and final relative reach.
struct TrialOutcome {
    history:  Vec<usize>,
    relative: f64,
}

fn run_one(config: &DiffusionConfig, plan: &TrialPlan, trial: usize) -> SimResult<TrialOutcome> {
    let mut engine = EngineBuilder::new(config.clone())
        .rng_seed(plan.rng_seed)
        .replica(trial as u64)
        .placement(plan.placement)
        .build()?;
    engine.jump_generations(plan.generations);
    tracing::debug!(trial, relative = engine.rumor_relative(), "trial finished");
    Ok(TrialOutcome {
        relative: engine.rumor_relative(),
        history:  engine.history,
    })
}

/// Run `plan.trials` independent engines and average their histories.
pub fn run_trials(config: &DiffusionConfig, plan: &TrialPlan) -> SimResult<TrialSummary> {
    if plan.trials == 0 {
        return Err(SimError::NoTrials);
    }

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<TrialOutcome> = (0..plan.trials)
        .map(|k| run_one(config, plan, k))
        .collect::<SimResult<_>>()?;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<TrialOutcome> = {
        use rayon::prelude::*;
        (0..plan.trials)
            .into_par_iter()
            .map(|k| run_one(config, plan, k))
            .collect::<SimResult<_>>()?
    };

    let len = plan.generations as usize + 1;
    let mut mean_history = vec![0.0; len];
    for outcome in &outcomes {
        for (acc, &n) in mean_history.iter_mut().zip(&outcome.history) {
            *acc += n as f64;
        }
    }
    let n = outcomes.len() as f64;
    mean_history.iter_mut().for_each(|x| *x /= n);

    let summary = TrialSummary {
        trials: plan.trials,
        generations: plan.generations,
        mean_history,
        final_relative: outcomes.iter().map(|o| o.relative).collect(),
    };
    tracing::info!(
        trials = summary.trials,
        generations = summary.generations,
        mean_relative = summary.mean_rumor_relative(),
        "trials complete"
    );
    Ok(summary)
}
