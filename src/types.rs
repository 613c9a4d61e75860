//! The fitness capability supplied by the caller.

/// Scores a packed bitstring. Higher is better.
///
/// The engine treats this as a pure black box: it may be called an
/// unbounded number of times and must return the same value for the same
/// bitstring within one run. The cached-fitness invariant of
/// [`Population`](crate::Population) depends on that determinism.
///
/// Returning a non-finite value (`NaN`, `±inf`) is a contract violation;
/// the engine fails fast with a panic at the scoring boundary rather than
/// let it corrupt the best-fitness comparisons.
///
/// Any `Fn(&[u8]) -> f64` closure or function qualifies via the blanket
/// impl:
///
/// ```
/// use steady_ga::FitnessFunction;
///
/// let one_max = |bits: &[u8]| bits.iter().map(|b| b.count_ones() as f64).sum();
/// assert_eq!(one_max.rank(&[0b0000_0111]), 3.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Returns the fitness of `bitstring`. Higher is better.
    fn rank(&self, bitstring: &[u8]) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[u8]) -> f64 + Send + Sync,
{
    fn rank(&self, bitstring: &[u8]) -> f64 {
        self(bitstring)
    }
}

/// Scores `bits`, rejecting non-finite results at the boundary.
pub(crate) fn score<F: FitnessFunction + ?Sized>(fitness: &F, bits: &[u8]) -> f64 {
    let value = fitness.rank(bits);
    assert!(
        value.is_finite(),
        "fitness function returned a non-finite value: {value}"
    );
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_satisfies_trait() {
        let constant = |_: &[u8]| 7.5;
        assert_eq!(constant.rank(&[0x00, 0xFF]), 7.5);
    }

    #[test]
    fn test_fn_item_satisfies_trait() {
        fn popcount(bits: &[u8]) -> f64 {
            bits.iter().map(|b| b.count_ones() as f64).sum()
        }
        assert_eq!(popcount.rank(&[0xFF, 0x01]), 9.0);
    }

    #[test]
    fn test_score_passes_finite_values() {
        let f = |_: &[u8]| -3.25;
        assert_eq!(score(&f, &[0x00]), -3.25);
    }

    #[test]
    #[should_panic(expected = "non-finite value")]
    fn test_score_rejects_nan() {
        let f = |_: &[u8]| f64::NAN;
        score(&f, &[0x00]);
    }

    #[test]
    #[should_panic(expected = "non-finite value")]
    fn test_score_rejects_infinity() {
        let f = |_: &[u8]| f64::INFINITY;
        score(&f, &[0x00]);
    }
}
