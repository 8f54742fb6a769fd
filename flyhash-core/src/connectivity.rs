//! Seeded random bipartite connectivity between ORNs and KCs.
//!
//! Each Kenyon cell (KC) samples a small subset of olfactory receptor
//! neuron (ORN) positions. Sampling is with replacement, and duplicate draws
//! collapse because a cell's synapses form a set. The pattern is built once
//! per configuration and is read-only afterwards: callers share it behind an
//! `Arc` across any number of concurrent hash computations.
//!
//! Storage is a sorted index list per cell. Fan-in is a handful of indices
//! for realistic configurations, so `SmallVec<[u16; 8]>` keeps every cell
//! inline in the common case.

use crate::error::{FlyHashError, Result};
use crate::rng::SplitMix64;
use smallvec::SmallVec;

/// Largest ORN dimension addressable by the `u16` synapse indices.
pub const MAX_ORN: usize = u16::MAX as usize + 1;

/// The set of ORN positions one KC reads from.
///
/// Indices are sorted ascending and unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSynapses {
    orns: SmallVec<[u16; 8]>,
}

impl CellSynapses {
    /// Build from raw draws. Duplicates collapse.
    pub fn from_draws(mut draws: SmallVec<[u16; 8]>) -> Self {
        draws.sort_unstable();
        draws.dedup();
        Self { orns: draws }
    }

    /// Is ORN `orn` connected to this cell?
    #[inline]
    pub fn is_connected(&self, orn: usize) -> bool {
        match u16::try_from(orn) {
            Ok(orn) => self.orns.binary_search(&orn).is_ok(),
            Err(_) => false,
        }
    }

    /// Connected ORN indices in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.orns.iter().map(|&i| i as usize)
    }

    /// Number of distinct connected ORNs.
    #[inline]
    pub fn len(&self) -> usize {
        self.orns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orns.is_empty()
    }
}

/// Fixed connectivity pattern: one `CellSynapses` per KC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity {
    n_orn: usize,
    samples_per_kc: usize,
    cells: Vec<CellSynapses>,
}

impl Connectivity {
    /// Draw a pattern of `n_kc` cells, each sampling `samples_per_kc` ORN
    /// indices uniformly from `[0, n_orn)`.
    ///
    /// The result depends only on the arguments. The same dimensions and seed
    /// always produce an identical pattern, independent of any other
    /// randomness in the process.
    ///
    /// # Errors
    /// `InvalidConfig` if any dimension is zero or `n_orn > MAX_ORN`.
    pub fn generate(n_orn: usize, n_kc: usize, samples_per_kc: usize, seed: i64) -> Result<Self> {
        if n_orn == 0 {
            return Err(FlyHashError::invalid_config("n_orn must be > 0"));
        }
        if n_orn > MAX_ORN {
            return Err(FlyHashError::invalid_config(format!(
                "n_orn must be <= {}, got {}",
                MAX_ORN, n_orn
            )));
        }
        if n_kc == 0 {
            return Err(FlyHashError::invalid_config("n_kc must be > 0"));
        }
        if samples_per_kc == 0 {
            return Err(FlyHashError::invalid_config("samples_per_kc must be > 0"));
        }

        let mut rng = SplitMix64::from_signed(seed);
        let cells: Vec<CellSynapses> = (0..n_kc)
            .map(|_| {
                let draws: SmallVec<[u16; 8]> = (0..samples_per_kc)
                    .map(|_| rng.next_below(n_orn as u64) as u16)
                    .collect();
                CellSynapses::from_draws(draws)
            })
            .collect();

        let total: usize = cells.iter().map(CellSynapses::len).sum();
        tracing::debug!(
            n_orn,
            n_kc,
            samples_per_kc,
            seed,
            mean_fan_in = total as f64 / n_kc as f64,
            "built connectivity pattern"
        );

        Ok(Self {
            n_orn,
            samples_per_kc,
            cells,
        })
    }

    /// Is ORN `orn` connected to KC `kc`? Out-of-range indices are unconnected.
    #[inline]
    pub fn is_connected(&self, kc: usize, orn: usize) -> bool {
        self.cells.get(kc).is_some_and(|c| c.is_connected(orn))
    }

    /// Synapses of KC `kc`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, kc: usize) -> Option<&CellSynapses> {
        self.cells.get(kc)
    }

    /// All cells in KC order.
    #[inline]
    pub fn cells(&self) -> &[CellSynapses] {
        &self.cells
    }

    #[inline]
    pub fn n_orn(&self) -> usize {
        self.n_orn
    }

    #[inline]
    pub fn n_kc(&self) -> usize {
        self.cells.len()
    }

    /// Configured draws per cell, before duplicates collapse.
    #[inline]
    pub fn samples_per_kc(&self) -> usize {
        self.samples_per_kc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_from_draws_dedups_and_sorts() {
        let cell = CellSynapses::from_draws(smallvec![9, 3, 9, 1, 3]);
        assert_eq!(cell.iter().collect::<Vec<_>>(), vec![1, 3, 9]);
        assert_eq!(cell.len(), 3);
        assert!(cell.is_connected(3));
        assert!(!cell.is_connected(4));
        assert!(!cell.is_connected(usize::MAX));
    }

    #[test]
    fn test_generate_shape() {
        let conn = Connectivity::generate(32, 320, 4, 1234567890).unwrap();
        assert_eq!(conn.n_orn(), 32);
        assert_eq!(conn.n_kc(), 320);
        assert_eq!(conn.samples_per_kc(), 4);
        for cell in conn.cells() {
            assert!(!cell.is_empty());
            assert!(cell.len() <= 4);
            assert!(cell.iter().all(|i| i < 32));
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let a = Connectivity::generate(32, 320, 4, 99).unwrap();
        let b = Connectivity::generate(32, 320, 4, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_seed_sensitivity() {
        let a = Connectivity::generate(32, 320, 4, 1).unwrap();
        let b = Connectivity::generate(32, 320, 4, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_independent_of_interleaving() {
        // Building an unrelated pattern in between must not shift the stream.
        let a = Connectivity::generate(64, 100, 7, 5).unwrap();
        let _other = Connectivity::generate(64, 100, 7, 6).unwrap();
        let b = Connectivity::generate(64, 100, 7, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_sampling_covers_most_orns() {
        // s = n_orn draws with replacement: expect ~63% distinct per cell.
        let conn = Connectivity::generate(32, 200, 32, 7).unwrap();
        let mean: f64 =
            conn.cells().iter().map(|c| c.len() as f64).sum::<f64>() / conn.n_kc() as f64;
        assert!(mean > 16.0 && mean < 25.0, "mean fan-in = {}", mean);
    }

    #[test]
    fn test_is_connected_matches_iter() {
        let conn = Connectivity::generate(32, 50, 4, 42).unwrap();
        for kc in 0..conn.n_kc() {
            let cell = conn.cell(kc).unwrap();
            for orn in 0..32 {
                assert_eq!(conn.is_connected(kc, orn), cell.iter().any(|i| i == orn));
            }
        }
        assert!(!conn.is_connected(50, 0));
        assert!(conn.cell(50).is_none());
    }

    #[test]
    fn test_generate_rejects_bad_dimensions() {
        for (n_orn, n_kc, s) in [(0, 10, 1), (32, 0, 1), (32, 10, 0), (MAX_ORN + 1, 10, 1)] {
            let err = Connectivity::generate(n_orn, n_kc, s, 0).unwrap_err();
            assert!(
                matches!(err, FlyHashError::InvalidConfig { .. }),
                "({}, {}, {}) gave {:?}",
                n_orn,
                n_kc,
                s,
                err
            );
        }
    }
}
