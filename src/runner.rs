//! The steady-state search loop.
//!
//! Seeds a random population, then repeatedly draws a distinct pair,
//! mutates, breeds, and replaces until the best fitness stagnates for the
//! configured number of iterations. Sustained stagnation first doubles
//! the population capacity, which re-opens the unconditional append path
//! of breeding and lowers replacement pressure before termination is
//! considered.

use crate::bits::random_bitstring;
use crate::config::SearchConfig;
use crate::operators::{breed_and_replace, mutate};
use crate::population::{Population, Solution};
use crate::types::{score, FitnessFunction};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stagnation threshold for capacity growth, as a multiple of the current
/// population size.
const GROWTH_STAGNATION_FACTOR: usize = 3;

/// Result of a search run.
///
/// Contains the best solution found along with statistics about the run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best solution found during the entire run.
    pub best: Solution,

    /// Total number of evolutionary iterations executed.
    pub iterations: usize,

    /// Number of members in the population at termination.
    pub population_len: usize,

    /// Capacity ceiling at termination. Starts at the configured initial
    /// capacity and only ever doubles.
    pub capacity: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the steady-state evolutionary loop.
///
/// # Usage
///
/// ```
/// use steady_ga::{SearchConfig, SearchRunner};
///
/// let one_max = |bits: &[u8]| bits.iter().map(|b| b.count_ones() as f64).sum();
/// let config = SearchConfig::new(8).with_stagnation_limit(50).with_seed(42);
/// let result = SearchRunner::run(&one_max, &config);
/// assert!(result.best.fitness() > 0.0);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search to completion.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error) or if
    /// the fitness function returns a non-finite value.
    pub fn run<F>(fitness: &F, config: &SearchConfig) -> SearchResult
    where
        F: FitnessFunction + ?Sized,
    {
        Self::run_with_cancel(fitness, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// at the next iteration boundary and returns the best solution found
    /// so far.
    pub fn run_with_cancel<F>(
        fitness: &F,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SearchResult
    where
        F: FitnessFunction + ?Sized,
    {
        config.validate().expect("invalid SearchConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Seed the initial batch; the population scans it for the best.
        let seeded: Vec<Solution> = (0..config.initial_capacity)
            .map(|_| {
                let bits = random_bitstring(config.num_bits, &mut rng);
                let fitness_value = score(fitness, &bits);
                Solution::new(bits, fitness_value)
            })
            .collect();
        let mut population = Population::new(seeded);

        let mut previous_record = population.best_fitness();
        let mut iterations = 0usize;
        let mut cancelled = false;

        while population.stagnation() < config.stagnation_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let (spot1, spot2) = population.random_pair(&mut rng);
            mutate(&mut population, spot1, spot2, fitness, &mut rng);
            breed_and_replace(&mut population, spot1, spot2, fitness, &mut rng);

            if population.best_fitness() > previous_record {
                previous_record = population.best_fitness();
                population.reset_stagnation();
            } else {
                population.bump_stagnation();
            }

            // Stuck for a while: double the capacity. Appending resumes,
            // which lowers replacement pressure and lets the search
            // fine-tune with a larger pool. The reset also postpones
            // termination, since the same counter drives both.
            if population.stagnation() > GROWTH_STAGNATION_FACTOR * population.len() {
                population.grow();
                population.reset_stagnation();
            }

            iterations += 1;
        }

        SearchResult {
            best: population.best().clone(),
            iterations,
            population_len: population.len(),
            capacity: population.capacity(),
            cancelled,
        }
    }
}

/// Searches for the bitstring maximizing `fitness`.
///
/// Convenience wrapper over [`SearchRunner::run`]: `num_bits` logical
/// bits, the default initial capacity, a random seed, and termination
/// after `max_iterations_without_improvement` stagnant iterations.
pub fn find_best_solution<F>(
    num_bits: usize,
    fitness: &F,
    max_iterations_without_improvement: usize,
) -> Solution
where
    F: FitnessFunction + ?Sized,
{
    let config =
        SearchConfig::new(num_bits).with_stagnation_limit(max_iterations_without_improvement);
    SearchRunner::run(fitness, &config).best
}
