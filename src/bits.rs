//! Packed-bitstring primitives.
//!
//! Bitstrings are `[u8]` slices. Logical bit `i` lives in byte `i / 8`
//! at mask `1 << (i % 8)`, little-endian within each byte.

use rand::Rng;

/// Toggles the bit at logical index `position`.
///
/// # Panics
/// Panics if `position >= bitstring.len() * 8`.
pub fn flip_bit(bitstring: &mut [u8], position: usize) {
    bitstring[position / 8] ^= 1 << (position % 8);
}

/// Flips `count` bits chosen independently and uniformly at random over
/// the full bit range.
///
/// Positions may repeat, so fewer than `count` distinct bits may end up
/// changed. Callers that need a guaranteed net change must not rely on
/// `count` alone; an odd `count` always changes the bitstring, since each
/// flip toggles the parity of the total popcount.
pub fn flip_random_bits<R: Rng>(bitstring: &mut [u8], count: usize, rng: &mut R) {
    let total_bits = bitstring.len() * 8;
    for _ in 0..count {
        flip_bit(bitstring, rng.random_range(0..total_bits));
    }
}

/// Counts the bit positions where `a` and `b` agree.
///
/// The complement of the Hamming distance, computed byte-wise as the
/// population count of the XNOR of corresponding bytes.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn hamming_agreement(a: &[u8], b: &[u8]) -> usize {
    assert_eq!(a.len(), b.len(), "bitstrings must have equal length");
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (!(x ^ y)).count_ones() as usize)
        .sum()
}

/// Generates `num_bits` logical bits packed into `ceil(num_bits / 8)`
/// bytes, shuffled by repeated random flips to approximate a uniform draw.
///
/// When `num_bits` is not a multiple of eight, the trailing pad bits of
/// the last byte are part of the bit range like any other bits.
pub fn random_bitstring<R: Rng>(num_bits: usize, rng: &mut R) -> Vec<u8> {
    let mut bitstring = vec![0u8; num_bits.div_ceil(8)];
    let total_bits = bitstring.len() * 8;
    flip_random_bits(&mut bitstring, total_bits * 3, rng);
    bitstring
}
