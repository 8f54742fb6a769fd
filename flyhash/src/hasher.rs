//! The `FlyHash` handle: configuration plus its fixed connectivity pattern.
//!
//! Pipeline per call:
//!
//! ```text
//! bytes ─▶ extract_orn ─▶ zero_center ─▶ project ─▶ winner_take_all ─▶ encode
//!          (ORN, 8g)      (PN, 8g)       (KC, n_kc)  (top-k KC)          (ceil(n_kc/8) B)
//! ```
//!
//! The handle owns no scratch state. ORN, PN and KC vectors are locals of
//! each `hash` call, so one handle can be shared by reference or cloned
//! across threads and every call stays a pure function of
//! (config, pattern, input).

use std::sync::Arc;

use flyhash_core::{parallel_map_chunks, Connectivity, FlyFingerprint, Result};

use crate::config::FlyHashConfig;
use crate::encode::encode;
use crate::features::extract_orn;
use crate::projection::{project, zero_center};
use crate::wta::winner_take_all;

/// A configured fly hash function.
///
/// Cloning is cheap: the connectivity pattern is shared behind an `Arc`.
///
/// # Example
/// ```
/// use flyhash::FlyHash;
///
/// let fly = FlyHash::with_default_config().unwrap();
/// let a = fly.hash(b"this is a test phrase").unwrap();
/// let b = fly.hash(b"this is a test phrass").unwrap();
/// assert_eq!(a.len(), 40);
/// assert!(FlyHash::compare(&a, &b).unwrap() <= 32);
/// ```
#[derive(Clone, Debug)]
pub struct FlyHash {
    config: FlyHashConfig,
    connectivity: Arc<Connectivity>,
}

impl FlyHash {
    /// Validate `config` and draw its connectivity pattern.
    ///
    /// # Errors
    /// `InvalidConfig` if any dimension or fraction is out of range.
    pub fn new(config: FlyHashConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(?config, %err, "rejected fly hash configuration");
            return Err(err);
        }
        let connectivity = Connectivity::generate(
            config.n_orn,
            config.n_kc,
            config.samples_per_kc(),
            config.seed,
        )?;
        tracing::debug!(
            n_grams = config.n_grams,
            n_kc = config.n_kc,
            winners = config.winners(),
            fingerprint_bytes = config.fingerprint_bytes(),
            "configured fly hash"
        );
        Ok(Self {
            config,
            connectivity: Arc::new(connectivity),
        })
    }

    /// Positional form of [`FlyHash::new`].
    pub fn configure(
        n_grams: usize,
        n_orn: usize,
        n_kc: usize,
        seed: i64,
        sample_fraction: f64,
        sparse_fraction: f64,
    ) -> Result<Self> {
        Self::new(FlyHashConfig {
            n_grams,
            n_orn,
            n_kc,
            seed,
            sample_fraction,
            sparse_fraction,
        })
    }

    /// A fresh handle built from [`FlyHashConfig::DEFAULT`].
    pub fn with_default_config() -> Result<Self> {
        Self::new(FlyHashConfig::DEFAULT)
    }

    #[inline]
    pub fn config(&self) -> &FlyHashConfig {
        &self.config
    }

    #[inline]
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// KC activations after winner-take-all, before binarization.
    ///
    /// # Errors
    /// `InputTooShort` if `input` is shorter than one n-gram window.
    pub fn activations(&self, input: &[u8]) -> Result<Vec<f64>> {
        let mut pn = extract_orn(input, self.config.n_grams)?;
        zero_center(&mut pn);
        let mut kc = project(&pn, &self.connectivity);
        winner_take_all(&mut kc, self.config.winners());
        Ok(kc)
    }

    /// Fingerprint `input`.
    ///
    /// The result is always `ceil(n_kc / 8)` bytes with at most
    /// `ceil(sparse_fraction * n_kc)` bits set.
    ///
    /// # Errors
    /// `InputTooShort` if `input` is shorter than one n-gram window.
    pub fn hash(&self, input: &[u8]) -> Result<FlyFingerprint> {
        let kc = self.activations(input)?;
        let fp = encode(&kc);
        tracing::trace!(len = input.len(), active = fp.popcount(), "hashed input");
        Ok(fp)
    }

    /// Fingerprint many inputs across threads.
    ///
    /// Results are in input order and identical to calling [`FlyHash::hash`]
    /// on each input in turn.
    pub fn hash_batch<T>(&self, inputs: &[T]) -> Vec<Result<FlyFingerprint>>
    where
        T: AsRef<[u8]> + Sync,
    {
        parallel_map_chunks(0, inputs.len(), |start, end| {
            inputs[start..end]
                .iter()
                .map(|input| self.hash(input.as_ref()))
                .collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect()
    }

    /// Hamming distance between two fingerprints.
    ///
    /// # Errors
    /// `LengthMismatch` if the fingerprints differ in length.
    #[inline]
    pub fn compare(a: &FlyFingerprint, b: &FlyFingerprint) -> Result<u32> {
        a.hamming_distance(b)
    }
}
