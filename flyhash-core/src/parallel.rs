//! Thread-parallel execution utilities for batch hashing.
//!
//! Uses `std::thread::scope` for scoped parallelism: no runtime, no pool
//! to keep alive, and closures may borrow the shared read-only state.

/// Execute a closure in parallel over chunks of `[start, end)`, collecting
/// one result per chunk in range order.
///
/// Splits work across the available CPU cores. Small ranges run inline on
/// the calling thread. A panic inside a worker is re-raised on the caller.
///
/// # Arguments
/// * `start` - Start of range (inclusive).
/// * `end` - End of range (exclusive).
/// * `f` - Closure receiving `(chunk_start, chunk_end)`.
#[inline]
pub fn parallel_map_chunks<F, R>(start: usize, end: usize, f: F) -> Vec<R>
where
    F: Fn(usize, usize) -> R + Sync + Send + Copy,
    R: Send,
{
    if start >= end {
        return Vec::new();
    }
    let num_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    let total = end - start;
    let chunk_size = total.div_ceil(num_threads);

    if total <= chunk_size || num_threads <= 1 {
        // Small workload: run inline, no thread overhead
        return vec![f(start, end)];
    }

    std::thread::scope(|s| {
        let handles: Vec<_> = (start..end)
            .step_by(chunk_size)
            .map(|chunk_start| {
                let chunk_end = (chunk_start + chunk_size).min(end);
                s.spawn(move || f(chunk_start, chunk_end))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
}
