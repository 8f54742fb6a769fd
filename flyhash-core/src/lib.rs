//! # FlyHash Core
//!
//! Shared primitives for the fly hash pipeline.
//!
//! This crate provides:
//! - **Connectivity**: the fixed, seeded ORN → KC sampling pattern with
//!   named "is connected" / "iterate synapses" operations.
//! - **FlyFingerprint**: packed LSB-first bit vector with a Hamming metric.
//! - **SplitMix64**: instance-local deterministic PRNG.
//! - **Parallel execution**: scoped-thread chunking for batch workloads.
//! - **FlyHashError**: the error taxonomy shared by every operation.

pub mod connectivity;
pub mod error;
pub mod fingerprint;
pub mod parallel;
pub mod rng;

pub use connectivity::{CellSynapses, Connectivity, MAX_ORN};
pub use error::{FlyHashError, Result};
pub use fingerprint::{hamming_bytes, FlyFingerprint};
pub use parallel::parallel_map_chunks;
pub use rng::SplitMix64;
