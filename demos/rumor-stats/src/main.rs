//! rumor-stats: repeated-trial statistics for the rumor diffusion simulator.
//!
//! Runs `--times` independent engines with the same configuration, advances
//! each `--generations` generations, and prints the per-generation mean of
//! newly exposed individuals.  `--csv` additionally writes the averaged
//! history for plotting elsewhere.

mod report;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rumor_core::{BeliefDistribution, DiffusionConfig};
use rumor_lattice::Placement;
use rumor_sim::{TrialPlan, run_trials};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "rumor-stats")]
#[command(about = "Rumor spreading statistics simulator")]
struct Args {
    /// Side of the M×M world board
    #[arg(short = 'M', long, default_value_t = 100)]
    size: usize,

    /// Population density to randomize, in (0, 1]
    #[arg(short = 'P', long, default_value_t = 0.8)]
    density: f64,

    /// Generations a spreader waits before spreading again
    #[arg(short = 'L', long = "cool-down", default_value_t = 5)]
    cool_down: u32,

    /// Population fractions <BELIEVER MODERATE SKEPTIC DENIER>
    #[arg(short = 'S', long = "rumor-dist", num_args = 4, default_values_t = vec![0.25, 0.25, 0.25, 0.25])]
    rumor_dist: Vec<f64>,

    /// Number of independent trials
    #[arg(short = 'T', long, default_value_t = 1)]
    times: usize,

    /// Generations to simulate per trial
    #[arg(short = 'G', long, default_value_t = 60)]
    generations: u64,

    /// Root random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Lay belief levels out in row bands instead of at random
    #[arg(long)]
    banded: bool,

    /// Write the averaged history to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Result<DiffusionConfig> {
        let fractions: [f64; 4] = self
            .rumor_dist
            .as_slice()
            .try_into()
            .context("--rumor-dist takes exactly four fractions")?;
        let config = DiffusionConfig {
            size:         self.size,
            density:      self.density,
            cooldown:     self.cool_down,
            distribution: BeliefDistribution::from_fractions(fractions)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn plan(&self) -> TrialPlan {
        TrialPlan {
            trials:      self.times,
            generations: self.generations,
            rng_seed:    self.seed,
            placement:   if self.banded { Placement::Banded } else { Placement::Random },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.config()?;
    let plan = args.plan();

    println!("=== rumor-stats ===");
    println!("World size:         {}", config.size);
    println!("Population density: {}", config.density);
    println!("Rumor cool down:    {}", config.cooldown);
    let dist: Vec<String> = config
        .distribution
        .iter()
        .map(|(level, fraction)| format!("{level}={fraction}"))
        .collect();
    println!("Belief distribution: {}", dist.join(" "));
    println!(
        "Trials: {}  |  Generations: {}  |  Seed: {}  |  Placement: {:?}",
        plan.trials, plan.generations, plan.rng_seed, plan.placement
    );
    println!();

    let t0 = Instant::now();
    let summary = run_trials(&config, &plan)?;
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Mean rumor relative: {:.4}", summary.mean_rumor_relative());
    println!();
    print!("{}", report::history_table(&summary));

    if let Some(path) = &args.csv {
        report::write_csv(path, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nWrote {}", path.display());
    }

    Ok(())
}
