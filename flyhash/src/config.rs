//! Hash configuration: dimensions, sampling, sparsity and seed.
//!
//! A `FlyHashConfig` is plain data. It can be built in code, from the
//! `DEFAULT` constant, or deserialized from JSON where missing fields fall
//! back to the defaults. It is checked once by `validate()` when a
//! `FlyHash` is constructed and is never mutated afterwards.

use flyhash_core::{FlyHashError, Result, MAX_ORN};
use serde::{Deserialize, Serialize};

/// Bits per input byte; each n-gram offset contributes this many ORNs.
pub const BITS_PER_BYTE: usize = 8;

/// Parameters of one fly hash function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyHashConfig {
    /// Bytes per sliding window (g).
    pub n_grams: usize,
    /// ORN dimension. Must equal `8 * n_grams`.
    pub n_orn: usize,
    /// KC dimension: fingerprint width in bits.
    pub n_kc: usize,
    /// Seed for the connectivity pattern.
    pub seed: i64,
    /// Fraction of ORNs each KC samples, in (0, 1].
    pub sample_fraction: f64,
    /// Fraction of KCs surviving winner-take-all, in (0, 1].
    pub sparse_fraction: f64,
}

impl FlyHashConfig {
    /// 4-byte windows, 32 ORNs, 320 KCs, 10% sampling, 5% sparsity.
    pub const DEFAULT: Self = Self {
        n_grams: 4,
        n_orn: 4 * BITS_PER_BYTE,
        n_kc: 10 * 4 * BITS_PER_BYTE,
        seed: 1234567890,
        sample_fraction: 0.1,
        sparse_fraction: 0.05,
    };

    /// Default fractions and seed for a given window width. KC dimension is
    /// ten times the ORN dimension.
    pub fn for_n_grams(n_grams: usize) -> Self {
        Self {
            n_grams,
            n_orn: n_grams * BITS_PER_BYTE,
            n_kc: 10 * n_grams * BITS_PER_BYTE,
            ..Self::DEFAULT
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_n_kc(mut self, n_kc: usize) -> Self {
        self.n_kc = n_kc;
        self
    }

    pub fn with_sample_fraction(mut self, sample_fraction: f64) -> Self {
        self.sample_fraction = sample_fraction;
        self
    }

    pub fn with_sparse_fraction(mut self, sparse_fraction: f64) -> Self {
        self.sparse_fraction = sparse_fraction;
        self
    }

    /// ORN draws per KC: `ceil(sample_fraction * n_orn)`.
    #[inline]
    pub fn samples_per_kc(&self) -> usize {
        (self.sample_fraction * self.n_orn as f64).ceil() as usize
    }

    /// KCs allowed to survive winner-take-all: `ceil(sparse_fraction * n_kc)`.
    #[inline]
    pub fn winners(&self) -> usize {
        (self.sparse_fraction * self.n_kc as f64).ceil() as usize
    }

    /// Fingerprint length in bytes: `ceil(n_kc / 8)`.
    #[inline]
    pub fn fingerprint_bytes(&self) -> usize {
        self.n_kc.div_ceil(BITS_PER_BYTE)
    }

    /// Check every dimension and fraction.
    ///
    /// # Errors
    /// `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.n_grams == 0 {
            return Err(FlyHashError::invalid_config("n_grams must be > 0"));
        }
        if self.n_orn == 0 {
            return Err(FlyHashError::invalid_config("n_orn must be > 0"));
        }
        // One ORN per bit of every window offset.
        if self.n_grams.checked_mul(BITS_PER_BYTE) != Some(self.n_orn) {
            return Err(FlyHashError::invalid_config(format!(
                "n_orn must equal 8 * n_grams ({} * 8), got {}",
                self.n_grams, self.n_orn
            )));
        }
        if self.n_orn > MAX_ORN {
            return Err(FlyHashError::invalid_config(format!(
                "n_orn must be <= {}, got {}",
                MAX_ORN, self.n_orn
            )));
        }
        if self.n_kc == 0 {
            return Err(FlyHashError::invalid_config("n_kc must be > 0"));
        }
        check_fraction("sample_fraction", self.sample_fraction)?;
        check_fraction("sparse_fraction", self.sparse_fraction)?;
        Ok(())
    }
}

impl Default for FlyHashConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_fraction(name: &str, value: f64) -> Result<()> {
    // NaN fails both comparisons.
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FlyHashError::invalid_config(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_derived_values() {
        let cfg = FlyHashConfig::default();
        assert_eq!(cfg, FlyHashConfig::DEFAULT);
        assert_eq!(cfg.n_orn, 32);
        assert_eq!(cfg.n_kc, 320);
        assert_eq!(cfg.samples_per_kc(), 4);
        assert_eq!(cfg.winners(), 16);
        assert_eq!(cfg.fingerprint_bytes(), 40);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_for_n_grams() {
        let cfg = FlyHashConfig::for_n_grams(3);
        assert_eq!(cfg.n_orn, 24);
        assert_eq!(cfg.n_kc, 240);
        assert_eq!(cfg.seed, FlyHashConfig::DEFAULT.seed);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_fingerprint_bytes_rounds_up() {
        let cfg = FlyHashConfig::DEFAULT.with_n_kc(100);
        assert_eq!(cfg.fingerprint_bytes(), 13);
        assert_eq!(cfg.winners(), 5);
    }

    #[test]
    fn test_full_fractions_are_valid() {
        let cfg = FlyHashConfig::DEFAULT
            .with_sample_fraction(1.0)
            .with_sparse_fraction(1.0);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.samples_per_kc(), 32);
        assert_eq!(cfg.winners(), 320);
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            FlyHashConfig {
                n_grams: 0,
                n_orn: 0,
                ..FlyHashConfig::DEFAULT
            },
            FlyHashConfig {
                n_orn: 31,
                ..FlyHashConfig::DEFAULT
            },
            FlyHashConfig::DEFAULT.with_n_kc(0),
            FlyHashConfig::DEFAULT.with_sample_fraction(0.0),
            FlyHashConfig::DEFAULT.with_sample_fraction(1.5),
            FlyHashConfig::DEFAULT.with_sample_fraction(f64::NAN),
            FlyHashConfig::DEFAULT.with_sparse_fraction(-0.1),
            FlyHashConfig::DEFAULT.with_sparse_fraction(f64::INFINITY),
            FlyHashConfig::for_n_grams(MAX_ORN / 8 + 1),
        ];
        for cfg in bad {
            assert!(
                matches!(cfg.validate(), Err(FlyHashError::InvalidConfig { .. })),
                "{:?} should be rejected",
                cfg
            );
        }
    }

    #[test]
    fn test_invalid_config_names_field() {
        let err = FlyHashConfig::DEFAULT
            .with_sparse_fraction(2.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("sparse_fraction"), "{}", err);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: FlyHashConfig = serde_json::from_str(r#"{"seed": 7, "n_kc": 640}"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.n_kc, 640);
        assert_eq!(cfg.n_grams, 4);
        assert_eq!(cfg.sparse_fraction, 0.05);
        assert!(cfg.validate().is_ok());
    }
}
