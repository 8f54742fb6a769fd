//! Packed binary fingerprint and its Hamming comparator.
//!
//! `FlyFingerprint` owns `ceil(n_kc / 8)` bytes. Bit `j` lives in byte
//! `j / 8` at offset `j % 8`, least-significant bit first. Padding bits past
//! `n_kc` in the last byte are always zero.
//!
//! Hamming distance is a metric on equal-length fingerprints. Comparing
//! fingerprints of different lengths (typically built under different
//! configurations) is reported as `LengthMismatch`, never truncated or padded.

use crate::error::{FlyHashError, Result};
use std::fmt;

/// Hamming distance between two raw fingerprint byte slices.
///
/// # Errors
/// `LengthMismatch` if `a.len() != b.len()`.
#[inline]
pub fn hamming_bytes(a: &[u8], b: &[u8]) -> Result<u32> {
    if a.len() != b.len() {
        return Err(FlyHashError::length_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum())
}

/// An immutable fly hash fingerprint.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FlyFingerprint {
    bytes: Vec<u8>,
}

impl FlyFingerprint {
    /// Wrap already-packed bytes.
    #[inline]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Pack a sequence of bit states, LSB-first.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut bytes = Vec::new();
        for (j, bit) in bits.into_iter().enumerate() {
            if j % 8 == 0 {
                bytes.push(0u8);
            }
            if bit {
                bytes[j / 8] |= 1 << (j % 8);
            }
        }
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Total addressable bits (byte length × 8).
    #[inline]
    pub fn bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Is bit `j` set? Out-of-range bits read as unset.
    #[inline]
    pub fn is_set(&self, j: usize) -> bool {
        self.bytes
            .get(j / 8)
            .is_some_and(|&b| b & (1 << (j % 8)) != 0)
    }

    /// Indices of set bits, ascending.
    pub fn active_bits(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.bits()).filter(move |&j| self.is_set(j))
    }

    /// Hamming weight (number of set bits).
    #[inline]
    pub fn popcount(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Hamming distance (number of differing bits).
    ///
    /// # Errors
    /// `LengthMismatch` if the fingerprints differ in byte length.
    #[inline]
    pub fn hamming_distance(&self, other: &Self) -> Result<u32> {
        hamming_bytes(&self.bytes, &other.bytes)
    }

    /// Hamming similarity in [0.0, 1.0] = 1 - hamming_distance / total_bits.
    ///
    /// Two empty fingerprints are identical and score 1.0.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        let dist = self.hamming_distance(other)?;
        if self.bytes.is_empty() {
            return Ok(1.0);
        }
        Ok(1.0 - dist as f64 / self.bits() as f64)
    }

    /// Lowercase hex, two digits per byte in storage order.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8]> for FlyFingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<FlyFingerprint> for Vec<u8> {
    fn from(fp: FlyFingerprint) -> Self {
        fp.bytes
    }
}

impl fmt::Display for FlyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bytes {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FlyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlyFingerprint({})", self)
    }
}
