//! Genetic operators: diversity-aware mutation and single-point crossover.
//!
//! Mutation strength is driven by how much the two selected parents agree.
//! Near-identical or near-complementary pairs push mutation hard to keep
//! the search exploring; pairs at intermediate diversity get a gentle
//! nudge and let crossover do the work.

use crate::bits::{flip_random_bits, hamming_agreement};
use crate::population::{Population, Solution};
use crate::types::{score, FitnessFunction};
use rand::Rng;

/// Fraction of the bitstring that mutation may flip at full strength.
const MAX_MUTATION_FRACTION: f64 = 0.1;

/// Computes the mutation strength for a pair of parents, in `[0, 1]`.
///
/// The Hamming agreement is normalized to a fraction `s` of the total bit
/// count, centered to `2 * (s - 0.5)` and squared. The resulting bowl
/// shape is 0 for a pair at half agreement and 1 for identical or fully
/// complementary parents.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn mutation_strength(a: &[u8], b: &[u8]) -> f64 {
    let total_bits = (a.len() * 8) as f64;
    let agreement = hamming_agreement(a, b) as f64 / total_bits;
    let centered = 2.0 * (agreement - 0.5);
    centered * centered
}

/// Single-point crossover of two equal-length parents at a point drawn
/// uniformly over the full bit range.
///
/// See [`crossover_at`] for the recombination rule.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn single_point_crossover<R: Rng>(parent1: &[u8], parent2: &[u8], rng: &mut R) -> Vec<u8> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    let point = rng.random_range(0..parent1.len() * 8);
    crossover_at(parent1, parent2, point)
}

/// Recombines two parents at the logical bit index `point`.
///
/// Bits below `point` come from `parent1`, bits at or above it from
/// `parent2`. The split is exact at bit granularity: whole bytes on
/// either side of the split byte are copied directly, and a low-order
/// mask stitches the byte containing the point.
///
/// # Panics
/// Panics if the parents differ in length or `point` is out of range.
pub fn crossover_at(parent1: &[u8], parent2: &[u8], point: usize) -> Vec<u8> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(point < parent1.len() * 8, "crossover point out of range");

    let split = point / 8;
    let mut child = vec![0u8; parent1.len()];
    child[..split].copy_from_slice(&parent1[..split]);
    child[split + 1..].copy_from_slice(&parent2[split + 1..]);

    let mask = (1u8 << (point % 8)) - 1;
    child[split] = (parent1[split] & mask) | (parent2[split] & !mask);
    child
}

/// Mutates one of the two selected members in place.
///
/// The target is `spot2` when `spot1` currently holds the best solution,
/// otherwise `spot1`; the best slot is never mutated, which keeps the
/// cached best index valid without a rescan. The number of flipped bits
/// scales with [`mutation_strength`] of the pair, capped at 10% of the
/// bitstring and never below one bit. The target is re-scored immediately
/// so its cached fitness cannot go stale, and the best cache is refreshed
/// when the mutant beats it.
///
/// # Panics
/// Panics if either index is out of range or the fitness function returns
/// a non-finite value.
pub fn mutate<F, R>(population: &mut Population, spot1: usize, spot2: usize, fitness: &F, rng: &mut R)
where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    let strength = mutation_strength(population.bits(spot1), population.bits(spot2));

    let target = if spot1 == population.best_index() {
        spot2
    } else {
        spot1
    };

    let total_bits = population.bits(target).len() * 8;
    let flips = ((strength * MAX_MUTATION_FRACTION * total_bits as f64) as usize).max(1);
    flip_random_bits(population.bits_mut(target), flips, rng);

    let rescored = score(fitness, population.bits(target));
    population.set_fitness(target, rescored);
}

/// Breeds a child from the members at `spot1` and `spot2` and decides its
/// fate.
///
/// Below capacity the child is appended unconditionally. At capacity the
/// child only ever replaces a parent it strictly beats: beating both
/// parents replaces the weaker one (maximizing the fitness gain per
/// replacement), beating one replaces that one, beating neither leaves
/// the population unchanged. The best-fitness cache is refreshed on every
/// insert, so per-slot fitness is non-decreasing under breeding.
///
/// # Panics
/// Panics if either index is out of range or the fitness function returns
/// a non-finite value.
pub fn breed_and_replace<F, R>(
    population: &mut Population,
    spot1: usize,
    spot2: usize,
    fitness: &F,
    rng: &mut R,
) where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    let child_bits = single_point_crossover(population.bits(spot1), population.bits(spot2), rng);
    let child_fitness = score(fitness, &child_bits);
    let child = Solution::new(child_bits, child_fitness);

    if !population.is_full() {
        population.push(child);
        return;
    }

    let fitness1 = population.solutions()[spot1].fitness();
    let fitness2 = population.solutions()[spot2].fitness();
    if child_fitness > fitness1 && child_fitness > fitness2 {
        let weaker = if fitness1 < fitness2 { spot1 } else { spot2 };
        population.replace(weaker, child);
    } else if child_fitness > fitness1 {
        population.replace(spot1, child);
    } else if child_fitness > fitness2 {
        population.replace(spot2, child);
    }
}
