//! Byte n-gram features: the ORN vector.
//!
//! A window of `g` bytes slides over the input one byte at a time. ORN
//! `8k + j` counts how many windows have bit `j` set at byte offset `k`.
//! The vector length is `8g` whatever the input length.

use crate::config::BITS_PER_BYTE;
use flyhash_core::{FlyHashError, Result};

/// Build the ORN histogram for `input` with window width `n_grams`.
///
/// # Errors
/// `InputTooShort` if `input.len() < n_grams`, i.e. there is no window.
pub fn extract_orn(input: &[u8], n_grams: usize) -> Result<Vec<f64>> {
    if n_grams == 0 || input.len() < n_grams {
        return Err(FlyHashError::input_too_short(input.len(), n_grams));
    }

    let mut orn = vec![0.0f64; n_grams * BITS_PER_BYTE];
    for window in input.windows(n_grams) {
        for (k, &byte) in window.iter().enumerate() {
            let base = k * BITS_PER_BYTE;
            for j in 0..BITS_PER_BYTE {
                if byte & (1 << j) != 0 {
                    orn[base + j] += 1.0;
                }
            }
        }
    }
    Ok(orn)
}

/// Number of n-gram windows in an input of `len` bytes.
#[inline]
pub fn window_count(len: usize, n_grams: usize) -> usize {
    if n_grams == 0 || len < n_grams {
        0
    } else {
        len - n_grams + 1
    }
}
