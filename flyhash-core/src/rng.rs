//! Deterministic PRNG for connectivity sampling.
//!
//! `SplitMix64` is a fast, high-quality 64-bit PRNG with no external deps.
//! Every `Connectivity` owns its own instance seeded from the caller's seed,
//! so building several patterns in one process never perturbs another
//! pattern's reproducibility. The output sequence is fixed by the algorithm
//! itself and does not change across crate versions.

/// SplitMix64 PRNG: deterministic, fast, statistically strong.
///
/// Period: 2^64. Passes BigCrush. Single u64 state.
///
/// # Example
/// ```
/// use flyhash_core::SplitMix64;
///
/// let mut rng = SplitMix64::new(42);
/// let idx = rng.next_below(32);
/// assert!(idx < 32);
/// ```
#[derive(Clone, Debug)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    /// Create a new PRNG with the given seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Seed from a signed value, reinterpreting the two's-complement bits.
    #[inline]
    pub fn from_signed(seed: i64) -> Self {
        Self(seed as u64)
    }

    /// Next raw u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1).
    ///
    /// Uses the top 53 bits for a full mantissa.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Multiply-high range reduction (Lemire). The bias is at most
    /// `bound / 2^64`, which is negligible for ORN-sized bounds.
    /// Returns 0 when `bound == 0`.
    #[inline]
    pub fn next_below(&mut self, bound: u64) -> u64 {
        ((self.next_u64() as u128 * bound as u128) >> 64) as u64
    }
}
