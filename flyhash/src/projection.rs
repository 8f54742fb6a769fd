//! Zero-centering (ORN → PN) and sparse random projection (PN → KC).

use flyhash_core::Connectivity;

/// Subtract the arithmetic mean from every element in place.
///
/// Constant input becomes all zeros. Empty input is left untouched.
pub fn zero_center(values: &mut [f64]) {
    if values.is_empty() {
        return;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    for v in values.iter_mut() {
        *v -= mean;
    }
}

/// Project PN activity through the connectivity pattern.
///
/// `KC[j] = sum(PN[i] for i in cell j) / samples_per_kc`. The divisor is
/// the configured draw count, not the deduplicated synapse count, so two
/// cells with the same synapses always score the same.
///
/// `pn.len()` must equal `conn.n_orn()`; the caller guarantees it.
pub fn project(pn: &[f64], conn: &Connectivity) -> Vec<f64> {
    debug_assert_eq!(pn.len(), conn.n_orn());
    let scale = 1.0 / conn.samples_per_kc() as f64;
    conn.cells()
        .iter()
        .map(|cell| cell.iter().map(|i| pn[i]).sum::<f64>() * scale)
        .collect()
}
