//! Monte Carlo estimate of the double-tree heuristic's approximation ratio.
//!
//! For every instance size in a range, a batch of random complete graphs is
//! solved twice: once with the double-tree heuristic and once exhaustively.
//! The mean of `heuristic / optimal` over the batch is reported per size.
//!
//! Sizes run one after another. Trials of one size run in parallel on a
//! dedicated rayon pool and each trial owns its graph, tree and tour. The only
//! shared state is the per-size [`RatioAccumulator`], updated under a mutex.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::cs::approx::{double_tree_tour, validate_tour};
use crate::cs::error::{Error, Result};
use crate::cs::graph::{brute_force_tsp, check_coordinate_bound, Graph};

/// Largest size whose exhaustive search finishes in reasonable time.
const COMFORTABLE_EXACT_SIZE: usize = 11;

/// Parameters for an approximation-ratio experiment
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Smallest instance size, inclusive
    pub size_start: usize,
    /// Largest instance size, inclusive
    pub size_end: usize,
    /// Random instances per size
    pub trials: usize,
    /// Points are drawn from `[-max_from_origin, max_from_origin]²`
    pub max_from_origin: f64,
    /// Worker threads; `None` uses every available hardware thread
    pub workers: Option<usize>,
    /// Base seed for reproducible runs; `None` seeds each trial from entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            size_start: 4,
            size_end: 11,
            trials: 16,
            max_from_origin: 100.0,
            workers: None,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn with_sizes(mut self, size_start: usize, size_end: usize) -> Self {
        self.size_start = size_start;
        self.size_end = size_end;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_max_from_origin(mut self, max_from_origin: f64) -> Self {
        self.max_from_origin = max_from_origin;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size_start == 0 {
            return Err(Error::invalid_input("instance sizes start at 1"));
        }
        if self.size_start > self.size_end {
            return Err(Error::invalid_input(format!(
                "size range {}..={} is empty",
                self.size_start, self.size_end
            )));
        }
        if self.trials == 0 {
            return Err(Error::invalid_input("at least one trial per size is required"));
        }
        check_coordinate_bound(self.max_from_origin, self.size_end)?;
        if self.workers == Some(0) {
            return Err(Error::invalid_input("worker pool needs at least one thread"));
        }
        Ok(())
    }
}

/// Mean ratio for one instance size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeResult {
    pub n: usize,
    pub mean_ratio: f64,
    pub trials: usize,
    pub elapsed: Duration,
}

/// Running total of `ratio / trials` contributions for one size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioAccumulator {
    total: f64,
    contributions: usize,
}

impl RatioAccumulator {
    pub fn add(&mut self, share: f64) {
        self.total += share;
        self.contributions += 1;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn contributions(&self) -> usize {
        self.contributions
    }
}

/// Heuristic over optimal weight. An instance whose optimum is zero (one
/// vertex, or every point coincident) has ratio 1.
pub fn approximation_ratio(heuristic: f64, optimal: f64) -> f64 {
    if optimal == 0.0 {
        1.0
    } else {
        heuristic / optimal
    }
}

/// Solves one random instance both ways and returns the ratio.
pub fn run_trial(n: usize, max_from_origin: f64, rng: &mut ChaCha20Rng) -> Result<f64> {
    let graph = Graph::random_complete(n, max_from_origin, rng)?;

    let (tour, heuristic) = double_tree_tour(&graph);
    validate_tour(&tour, n)?;
    let (optimal, _) = brute_force_tsp(&graph);

    Ok(approximation_ratio(heuristic, optimal))
}

/// Seed of one trial, independent of which worker runs it.
fn trial_seed(base: u64, n: usize, trial: usize) -> u64 {
    base ^ ((n as u64) << 32 | trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub struct ApproximationExperiment {
    config: ExperimentConfig,
    pool: ThreadPool,
}

impl ApproximationExperiment {
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.unwrap_or(0))
            .thread_name(|i| format!("tsp-trial-{i}"))
            .build()?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Number of threads in the worker pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs every size in order.
    pub fn run(&self) -> Result<Vec<SizeResult>> {
        self.run_with(|_| {})
    }

    /// Runs every size in order, handing each result to `on_size` as soon as
    /// its batch completes.
    pub fn run_with<F>(&self, mut on_size: F) -> Result<Vec<SizeResult>>
    where
        F: FnMut(&SizeResult),
    {
        let mut results = Vec::with_capacity(self.config.size_end - self.config.size_start + 1);
        for n in self.config.size_start..=self.config.size_end {
            let result = self.run_size(n)?;
            on_size(&result);
            results.push(result);
        }
        Ok(results)
    }

    /// Runs all trials of size `n` on the pool and blocks until every one has
    /// contributed.
    pub fn run_size(&self, n: usize) -> Result<SizeResult> {
        if n == 0 {
            return Err(Error::invalid_input("instance sizes start at 1"));
        }
        if n > COMFORTABLE_EXACT_SIZE {
            warn!("exhaustive search over {n} vertices examines {}! cycles per trial", n - 1);
        }

        let trials = self.config.trials;
        let max_from_origin = self.config.max_from_origin;
        let seed = self.config.seed;
        let accumulator = Mutex::new(RatioAccumulator::default());
        let start = Instant::now();

        self.pool.install(|| {
            (0..trials).into_par_iter().try_for_each(|trial| -> Result<()> {
                debug!("n = {n} : trial {}/{trials}", trial + 1);
                let mut rng = match seed {
                    Some(base) => ChaCha20Rng::seed_from_u64(trial_seed(base, n, trial)),
                    None => ChaCha20Rng::from_entropy(),
                };
                let ratio = run_trial(n, max_from_origin, &mut rng)?;

                accumulator
                    .lock()
                    .map_err(|e| Error::Poisoned(e.to_string()))?
                    .add(ratio / trials as f64);
                Ok(())
            })
        })?;

        let accumulator = accumulator
            .into_inner()
            .map_err(|e| Error::Poisoned(e.to_string()))?;
        debug_assert_eq!(accumulator.contributions(), trials);

        let result = SizeResult {
            n,
            mean_ratio: accumulator.total(),
            trials,
            elapsed: start.elapsed(),
        };
        info!(
            "n = {}: mean ratio {:.6} over {} trials in {} ms",
            n,
            result.mean_ratio,
            trials,
            result.elapsed.as_millis()
        );
        Ok(result)
    }
}
