//! Winner-take-all sparsification (the APL feedback loop).
//!
//! Only the `k` most active KCs survive. The threshold `τ` is the
//! `(k+1)`-th largest activation, i.e. the best value that did not make the
//! cut, and every activation `<= τ` is zeroed. With distinct values exactly
//! `k` cells survive. When several cells tie at `τ` across the cut they are
//! all dropped, so fewer than `k` may survive. The survivor count never
//! exceeds `k`.
//!
//! Selection is `select_nth_unstable_by` on a scratch copy: introselect,
//! linear on average, no heap to sift.

use std::cmp::Ordering;

/// The `(k+1)`-th largest value of `values`: the largest value excluded from
/// the top `k`.
///
/// Returns `None` when `k >= values.len()` (nothing is excluded).
pub fn top_k_threshold(values: &[f64], k: usize) -> Option<f64> {
    if k >= values.len() {
        return None;
    }
    let mut scratch = values.to_vec();
    let (_, tau, _) = scratch.select_nth_unstable_by(k, descending);
    Some(*tau)
}

/// Keep the top `k` activations in place, zeroing the rest.
///
/// * `k == 0` zeroes everything.
/// * `k >= kc.len()` leaves `kc` unchanged.
pub fn winner_take_all(kc: &mut [f64], k: usize) {
    if k == 0 {
        kc.fill(0.0);
        return;
    }
    let Some(tau) = top_k_threshold(kc, k) else {
        return;
    };
    for v in kc.iter_mut() {
        if *v <= tau {
            *v = 0.0;
        }
    }
}

#[inline]
fn descending(a: &f64, b: &f64) -> Ordering {
    b.total_cmp(a)
}
