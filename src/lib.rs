//! Steady-state genetic algorithm over packed bitstrings.
//!
//! Searches the space of fixed-length bitstrings for one maximizing a
//! caller-supplied fitness function. Unlike a generational GA, the
//! population is never replaced wholesale: each iteration mutates one
//! existing member and breeds a single child, which either joins the
//! population or replaces a parent it strictly beats.
//!
//! Two ideas drive the search:
//!
//! - **Diversity-aware mutation**: mutation strength is bowl-shaped in
//!   the Hamming agreement of the selected pair. Near-identical or
//!   near-complementary parents get strong mutation to keep exploring,
//!   while pairs at intermediate diversity get a gentle nudge and let
//!   crossover do the work.
//! - **Adaptive capacity growth**: sustained stagnation doubles the
//!   population's capacity ceiling, re-opening the unconditional append
//!   path of breeding and lowering selection pressure so the search can
//!   fine-tune with a larger pool.
//!
//! # Core pieces
//!
//! - [`FitnessFunction`]: the caller's black-box scorer (higher is better)
//! - [`Population`] / [`Solution`]: the evolving set of candidates with
//!   best-fitness bookkeeping
//! - [`operators`]: mutation-strength computation, single-point crossover,
//!   and the mutate/breed steps
//! - [`SearchRunner`]: the steady-state loop that seeds, selects,
//!   mutates, breeds, replaces, and terminates on stagnation
//!
//! # Quick start
//!
//! ```
//! use steady_ga::find_best_solution;
//!
//! // OneMax: maximize the number of set bits.
//! let one_max = |bits: &[u8]| bits.iter().map(|b| b.count_ones() as f64).sum();
//!
//! let best = find_best_solution(8, &one_max, 50);
//! assert_eq!(best.bits().len(), 1);
//! assert!(best.fitness() >= 0.0);
//! ```

pub mod bits;
mod config;
pub mod operators;
mod population;
mod runner;
mod types;

pub use config::{SearchConfig, INITIAL_MAX_SIZE};
pub use population::{Population, Solution};
pub use runner::{find_best_solution, SearchResult, SearchRunner};
pub use types::FitnessFunction;
