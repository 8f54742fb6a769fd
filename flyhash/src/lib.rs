//! # FlyHash
//!
//! `flyhash` computes similarity-preserving binary fingerprints for byte
//! sequences, modelled on the fruit-fly olfactory circuit: byte n-gram
//! features (ORNs) are zero-centered (PNs), expanded through a sparse random
//! projection into Kenyon cells (KCs), and sparsified by winner-take-all.
//! Near-duplicate inputs land a few bits apart; unrelated inputs many bits
//! apart. Fingerprints are compared by Hamming distance.
//!
//! ```
//! use flyhash::{FlyHash, FlyHashConfig};
//!
//! let fly = FlyHash::new(FlyHashConfig::DEFAULT.with_seed(7)).unwrap();
//! let fp = fly.hash(b"different test phrase").unwrap();
//! assert_eq!(fp.len(), FlyHashConfig::DEFAULT.fingerprint_bytes());
//! ```

pub mod config;
pub mod encode;
pub mod features;
pub mod hasher;
pub mod projection;
pub mod wta;

pub use config::{FlyHashConfig, BITS_PER_BYTE};
pub use encode::{encode, pack_active};
pub use features::{extract_orn, window_count};
pub use hasher::FlyHash;
pub use projection::{project, zero_center};
pub use wta::{top_k_threshold, winner_take_all};

pub use flyhash_core::{
    hamming_bytes, CellSynapses, Connectivity, FlyFingerprint, FlyHashError, Result,
};
