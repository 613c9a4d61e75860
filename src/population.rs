//! The evolving population and its best-fitness bookkeeping.

use rand::Rng;

/// One candidate solution: a packed bitstring and its cached fitness.
///
/// The cached fitness always equals the fitness function applied to the
/// current bitstring content. Every content change inside the engine is
/// followed by a re-score before the solution becomes observable again,
/// so the cache can never go stale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    bitstring: Vec<u8>,
    fitness: f64,
}

impl Solution {
    /// Creates a solution from an already-scored bitstring.
    pub fn new(bitstring: Vec<u8>, fitness: f64) -> Self {
        Self { bitstring, fitness }
    }

    /// The packed bitstring.
    pub fn bits(&self) -> &[u8] {
        &self.bitstring
    }

    /// The cached fitness of the current bitstring content.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// The evolving set of candidates, with an eagerly maintained cache of
/// the best member.
///
/// Capacity starts at the seeded batch size and only ever doubles via
/// [`grow`](Self::grow); the member count never shrinks. Every member
/// write goes through a method that refreshes the best cache, so at any
/// observable point no member has a fitness above
/// [`best_fitness`](Self::best_fitness) and [`best`](Self::best) returns
/// the member at the cached index.
#[derive(Debug, Clone)]
pub struct Population {
    solutions: Vec<Solution>,
    max_size: usize,
    best_fitness: f64,
    best_fitness_index: usize,
    iterations_without_improvement: usize,
}

impl Population {
    /// Builds a population from an initial batch of scored solutions,
    /// with capacity equal to the batch size and a zeroed stagnation
    /// counter. The best cache is computed by a full scan.
    ///
    /// # Panics
    /// Panics if fewer than two solutions are supplied; the steady-state
    /// loop needs a distinct pair to draw from.
    pub fn new(solutions: Vec<Solution>) -> Self {
        assert!(
            solutions.len() >= 2,
            "population needs at least two solutions"
        );
        let (best_fitness_index, best_fitness) = scan_best(&solutions);
        Self {
            max_size: solutions.len(),
            solutions,
            best_fitness,
            best_fitness_index,
            iterations_without_improvement: 0,
        }
    }

    /// Current number of members.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Always `false`; a population holds at least two members.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Whether the member count has reached the capacity ceiling.
    pub fn is_full(&self) -> bool {
        self.solutions.len() >= self.max_size
    }

    /// Current capacity ceiling.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Read-only view of the members. Order carries no meaning; indices
    /// are only stable handles within one iteration.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Fitness of the best member.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Slot currently holding the best member.
    pub fn best_index(&self) -> usize {
        self.best_fitness_index
    }

    /// The best member found so far.
    pub fn best(&self) -> &Solution {
        &self.solutions[self.best_fitness_index]
    }

    /// Doubles the capacity ceiling. Capacity never shrinks.
    pub fn grow(&mut self) {
        self.max_size *= 2;
    }

    /// Consecutive iterations without a best-fitness improvement.
    pub fn stagnation(&self) -> usize {
        self.iterations_without_improvement
    }

    pub(crate) fn reset_stagnation(&mut self) {
        self.iterations_without_improvement = 0;
    }

    pub(crate) fn bump_stagnation(&mut self) {
        self.iterations_without_improvement += 1;
    }

    /// Draws two distinct member indices uniformly at random, resampling
    /// the second until it differs from the first.
    pub fn random_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let n = self.solutions.len();
        let spot1 = rng.random_range(0..n);
        let mut spot2 = rng.random_range(0..n);
        while spot2 == spot1 {
            spot2 = rng.random_range(0..n);
        }
        (spot1, spot2)
    }

    pub(crate) fn bits(&self, index: usize) -> &[u8] {
        self.solutions[index].bits()
    }

    /// Mutable access to one member's bitstring. The caller must re-score
    /// via [`set_fitness`](Self::set_fitness) before the population is
    /// observed again, and must never target the slot behind the best
    /// cache.
    pub(crate) fn bits_mut(&mut self, index: usize) -> &mut [u8] {
        debug_assert_ne!(
            index, self.best_fitness_index,
            "must not mutate the best slot"
        );
        &mut self.solutions[index].bitstring
    }

    /// Stores a freshly computed fitness for one member, refreshing the
    /// best cache when the member now beats it.
    pub(crate) fn set_fitness(&mut self, index: usize, fitness: f64) {
        self.solutions[index].fitness = fitness;
        if fitness > self.best_fitness {
            self.best_fitness = fitness;
            self.best_fitness_index = index;
        }
        debug_assert!(self.best_cache_consistent());
    }

    /// Appends a new member, refreshing the best cache when it is beaten.
    ///
    /// # Panics
    /// Panics if the population is already at capacity.
    pub(crate) fn push(&mut self, solution: Solution) {
        assert!(!self.is_full(), "population is at capacity");
        let fitness = solution.fitness();
        self.solutions.push(solution);
        if fitness > self.best_fitness {
            self.best_fitness = fitness;
            self.best_fitness_index = self.solutions.len() - 1;
        }
        debug_assert!(self.best_cache_consistent());
    }

    /// Overwrites the member at `index`, refreshing the best cache when
    /// the newcomer beats it.
    pub(crate) fn replace(&mut self, index: usize, solution: Solution) {
        debug_assert!(
            index != self.best_fitness_index || solution.fitness() > self.best_fitness,
            "must not overwrite the best slot with a weaker solution"
        );
        let fitness = solution.fitness();
        self.solutions[index] = solution;
        if fitness > self.best_fitness {
            self.best_fitness = fitness;
            self.best_fitness_index = index;
        }
        debug_assert!(self.best_cache_consistent());
    }

    /// Internal-consistency check: the cached index holds the cached
    /// fitness and no member exceeds it.
    fn best_cache_consistent(&self) -> bool {
        self.solutions[self.best_fitness_index].fitness() == self.best_fitness
            && self
                .solutions
                .iter()
                .all(|s| s.fitness() <= self.best_fitness)
    }
}

/// Full scan for the best member. Ties keep the earliest index.
fn scan_best(solutions: &[Solution]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_fitness = solutions[0].fitness();
    for (index, solution) in solutions.iter().enumerate().skip(1) {
        if solution.fitness() > best_fitness {
            best_fitness = solution.fitness();
            best_index = index;
        }
    }
    (best_index, best_fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Population {
        let solutions = fitnesses
            .iter()
            .map(|&f| Solution::new(vec![0u8], f))
            .collect();
        Population::new(solutions)
    }

    #[test]
    fn test_new_scans_for_best() {
        let pop = make_population(&[1.0, 5.0, 3.0, 5.0]);
        assert_eq!(pop.len(), 4);
        assert_eq!(pop.capacity(), 4);
        assert_eq!(pop.best_fitness(), 5.0);
        assert_eq!(pop.best_index(), 1, "ties keep the earliest index");
        assert_eq!(pop.best().fitness(), 5.0);
        assert_eq!(pop.stagnation(), 0);
    }

    #[test]
    #[should_panic(expected = "at least two")]
    fn test_new_rejects_single_solution() {
        make_population(&[1.0]);
    }

    #[test]
    fn test_push_updates_best_cache() {
        let mut pop = make_population(&[1.0, 2.0]);
        pop.grow();
        pop.push(Solution::new(vec![0xFF], 9.0));
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.best_fitness(), 9.0);
        assert_eq!(pop.best_index(), 2);

        pop.push(Solution::new(vec![0x01], 0.5));
        assert_eq!(pop.best_fitness(), 9.0, "weaker push leaves cache alone");
        assert_eq!(pop.best_index(), 2);
    }

    #[test]
    #[should_panic(expected = "at capacity")]
    fn test_push_at_capacity_panics() {
        let mut pop = make_population(&[1.0, 2.0]);
        pop.push(Solution::new(vec![0x00], 3.0));
    }

    #[test]
    fn test_replace_updates_best_cache() {
        let mut pop = make_population(&[1.0, 2.0, 3.0]);
        pop.replace(0, Solution::new(vec![0xFF], 7.0));
        assert_eq!(pop.best_fitness(), 7.0);
        assert_eq!(pop.best_index(), 0);

        pop.replace(1, Solution::new(vec![0x0F], 4.0));
        assert_eq!(pop.best_fitness(), 7.0);
        assert_eq!(pop.best_index(), 0);
        assert_eq!(pop.solutions()[1].fitness(), 4.0);
    }

    #[test]
    fn test_set_fitness_updates_best_cache() {
        let mut pop = make_population(&[1.0, 2.0]);
        pop.set_fitness(0, 6.0);
        assert_eq!(pop.best_fitness(), 6.0);
        assert_eq!(pop.best_index(), 0);

        // Lowering a non-best member leaves the cache untouched.
        pop.set_fitness(1, 0.5);
        assert_eq!(pop.best_fitness(), 6.0);
        assert_eq!(pop.best_index(), 0);
    }

    #[test]
    fn test_grow_doubles_capacity() {
        let mut pop = make_population(&[1.0, 2.0]);
        assert!(pop.is_full());
        pop.grow();
        assert_eq!(pop.capacity(), 4);
        assert!(!pop.is_full());
        pop.grow();
        assert_eq!(pop.capacity(), 8);
    }

    #[test]
    fn test_stagnation_counter() {
        let mut pop = make_population(&[1.0, 2.0]);
        pop.bump_stagnation();
        pop.bump_stagnation();
        assert_eq!(pop.stagnation(), 2);
        pop.reset_stagnation();
        assert_eq!(pop.stagnation(), 0);
    }

    #[test]
    fn test_random_pair_is_distinct() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (a, b) = pop.random_pair(&mut rng);
            assert_ne!(a, b);
            assert!(a < 2 && b < 2);
        }
    }

    #[test]
    fn test_random_pair_covers_all_indices() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let (a, b) = pop.random_pair(&mut rng);
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
