use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flyhash::{winner_take_all, FlyHash, FlyHashConfig};

/// Input sizes in bytes: a phrase, a paragraph, a page, a small file.
const INPUT_SIZES: &[usize] = &[32, 512, 4096, 65536];

/// KC dimensions for the sparsifier: default, 4×, 32×.
const KC_SIZES: &[usize] = &[320, 1280, 10240];

fn create_random_bytes(seed: u64, len: usize) -> Vec<u8> {
    // Simple LCG for reproducible pseudo-random data
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 33) as u8
        })
        .collect()
}

fn create_random_activations(seed: u64, len: usize) -> Vec<f64> {
    create_random_bytes(seed, len)
        .into_iter()
        .map(|b| b as f64 - 127.5)
        .collect()
}

// ============================================================================
// HASH: full pipeline
// ============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("FlyHash hash");
    let fly = FlyHash::with_default_config().unwrap();

    for &len in INPUT_SIZES {
        let input = create_random_bytes(42, len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("default", len), &len, |bencher, &_| {
            bencher.iter(|| fly.hash(black_box(&input)).unwrap())
        });
    }

    group.finish();
}

fn bench_hash_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("FlyHash hash_batch");
    let fly = FlyHash::with_default_config().unwrap();
    let docs: Vec<Vec<u8>> = (0..1024).map(|i| create_random_bytes(i, 256)).collect();

    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("parallel_1024x256", |bencher| {
        bencher.iter(|| black_box(fly.hash_batch(black_box(&docs))))
    });
    group.bench_function("sequential_1024x256", |bencher| {
        bencher.iter(|| {
            docs.iter()
                .map(|d| fly.hash(black_box(d)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

// ============================================================================
// WTA: introselect vs full sort
// ============================================================================

fn bench_wta(c: &mut Criterion) {
    let mut group = c.benchmark_group("Winner-take-all");

    for &n_kc in KC_SIZES {
        let kc = create_random_activations(7, n_kc);
        let k = FlyHashConfig::DEFAULT.with_n_kc(n_kc).winners();

        group.bench_with_input(BenchmarkId::new("select_nth", n_kc), &n_kc, |bencher, &_| {
            bencher.iter(|| {
                let mut v = kc.clone();
                winner_take_all(black_box(&mut v), k);
                v
            })
        });

        // Full sort baseline
        group.bench_with_input(BenchmarkId::new("full_sort", n_kc), &n_kc, |bencher, &_| {
            bencher.iter(|| {
                let mut sorted = kc.clone();
                sorted.sort_by(|a, b| b.total_cmp(a));
                let tau = sorted[k];
                kc.iter()
                    .map(|&v| if v > tau { v } else { 0.0 })
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

// ============================================================================
// COMPARE: Hamming distance
// ============================================================================

fn bench_compare(c: &mut Criterion) {
    let fly = FlyHash::with_default_config().unwrap();
    let a = fly.hash(b"this is a test phrase").unwrap();
    let b = fly.hash(b"different test phrase").unwrap();

    c.bench_function("FlyHash compare (320 bits)", |bencher| {
        bencher.iter(|| FlyHash::compare(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_hash, bench_hash_batch, bench_wta, bench_compare);
criterion_main!(benches);
