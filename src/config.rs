//! Search configuration.
//!
//! [`SearchConfig`] holds the parameters of one search run.

/// Initial capacity ceiling of a freshly seeded population.
pub const INITIAL_MAX_SIZE: usize = 16;

/// Configuration for a steady-state bitstring search.
///
/// # Defaults
///
/// ```
/// use steady_ga::SearchConfig;
///
/// let config = SearchConfig::new(64);
/// assert_eq!(config.num_bits, 64);
/// assert_eq!(config.stagnation_limit, 100);
/// assert_eq!(config.initial_capacity, 16);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use steady_ga::SearchConfig;
///
/// let config = SearchConfig::new(64)
///     .with_stagnation_limit(200)
///     .with_initial_capacity(32)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Logical bitstring length the search operates over.
    ///
    /// Bitstrings are packed into `num_bits.div_ceil(8)` bytes. When the
    /// length is not a multiple of eight, the trailing pad bits of the
    /// last byte take part in mutation and crossover and are visible to
    /// the fitness function.
    pub num_bits: usize,

    /// Number of consecutive iterations without a best-fitness improvement
    /// that terminates the run.
    ///
    /// Capacity growth resets the same counter, so growth events postpone
    /// termination.
    pub stagnation_limit: usize,

    /// Number of randomly seeded solutions, which is also the initial
    /// capacity ceiling.
    pub initial_capacity: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Creates a configuration for a `num_bits`-bit search with the
    /// default stagnation limit of 100 and initial capacity of
    /// [`INITIAL_MAX_SIZE`].
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            stagnation_limit: 100,
            initial_capacity: INITIAL_MAX_SIZE,
            seed: None,
        }
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the initial population capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_bits == 0 {
            return Err("num_bits must be at least 1".into());
        }
        if self.stagnation_limit == 0 {
            return Err("stagnation_limit must be at least 1".into());
        }
        if self.initial_capacity < 2 {
            return Err("initial_capacity must be at least 2 to draw distinct pairs".into());
        }
        Ok(())
    }
}
