use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::Rng;

use topk_fpgrowth::{transactions_from_matrix, FPGrowth, MinerConfig, Transaction};

/// One-hot transaction matrix with random rows.
///
/// - num_transactions: rows
/// - num_items: columns
/// - avg_transaction_size: average draws per row
/// - density: chance that a draw sets a cell
fn generate_matrix(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let draws = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;

        for _ in 0..draws.min(num_items) {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Transaction<usize>> {
    let matrix = generate_matrix(num_transactions, num_items, avg_transaction_size, density);
    transactions_from_matrix(matrix.view())
}

fn absolute_support(num_transactions: usize, relative: f64) -> u64 {
    ((relative * num_transactions as f64).ceil() as u64).max(1)
}

/// Scaling with dataset size
fn bench_top_k_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let miner = FPGrowth::new(MinerConfig::new(absolute_support(num_tx, 0.1), 50)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| miner.top_k(black_box(tx), &[]).unwrap());
        });
    }

    group.finish();
}

/// Heap size drives how fast the support floor rises
fn bench_top_k_heap_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_heap_size");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for k in [5usize, 20, 50, 200, 1000] {
        let miner = FPGrowth::new(MinerConfig::new(absolute_support(1000, 0.05), k)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter(|| miner.top_k(black_box(&transactions), &[]).unwrap());
        });
    }

    group.finish();
}

/// Different min_support thresholds
fn bench_top_k_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for min_sup in [0.05, 0.1, 0.2, 0.3, 0.5] {
        let miner = FPGrowth::new(MinerConfig::new(absolute_support(1000, min_sup), 50)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, _| {
                b.iter(|| miner.top_k(black_box(&transactions), &[]).unwrap());
            },
        );
    }

    group.finish();
}

/// Different data densities
fn bench_top_k_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];
    let miner = FPGrowth::new(MinerConfig::new(absolute_support(1000, 0.1), 50)).unwrap();

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| miner.top_k(black_box(tx), &[]).unwrap());
        });
    }

    group.finish();
}

/// Mining a handful of wanted items out of many
fn bench_top_k_wanted(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_wanted");

    let transactions = generate_transactions(1000, 100, 5, 0.4);
    let miner = FPGrowth::new(MinerConfig::new(absolute_support(1000, 0.02), 50)).unwrap();
    let wanted: Vec<usize> = (0..100).step_by(10).collect();

    group.bench_function("ecommerce_longtail_10_items", |b| {
        b.iter(|| miner.top_k(black_box(&transactions), black_box(&wanted)).unwrap());
    });
    group.bench_function("ecommerce_longtail_all_items", |b| {
        b.iter(|| miner.top_k(black_box(&transactions), &[]).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_top_k_scaling,
    bench_top_k_heap_size,
    bench_top_k_min_support,
    bench_top_k_density,
    bench_top_k_wanted
);
criterion_main!(benches);
