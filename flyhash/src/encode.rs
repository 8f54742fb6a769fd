//! Pack sparsified KC activity into fingerprint bytes.

use crate::config::BITS_PER_BYTE;
use flyhash_core::FlyFingerprint;

/// Pack `kc` into `ceil(kc.len() / 8)` bytes.
///
/// Bit `j` (byte `j / 8`, offset `j % 8`, LSB-first) is set iff `kc[j] > 0`.
pub fn pack_active(kc: &[f64]) -> Vec<u8> {
    let mut packed = vec![0u8; kc.len().div_ceil(BITS_PER_BYTE)];
    for (j, &v) in kc.iter().enumerate() {
        if v > 0.0 {
            packed[j / BITS_PER_BYTE] |= 1 << (j % BITS_PER_BYTE);
        }
    }
    packed
}

/// `pack_active` wrapped as a fingerprint.
#[inline]
pub fn encode(kc: &[f64]) -> FlyFingerprint {
    FlyFingerprint::from_bytes(pack_active(kc))
}
