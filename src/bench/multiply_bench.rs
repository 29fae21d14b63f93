use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use blockmul::{Algorithm, Matrix, multiply};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_multipliers(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_multiply");
    group.sample_size(10);

    for &n in &[64, 128, 256, 512] {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Matrix::random(n, &mut rng);
        let b = Matrix::random(n, &mut rng);

        // 2 * n^3 multiply-adds per product
        group.throughput(Throughput::Elements(2 * (n as u64).pow(3)));

        for (name, algorithm) in [
            ("direct", Algorithm::Direct),
            ("block", Algorithm::BlockRecursive),
            ("strassen", Algorithm::Strassen),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |bench, _| {
                bench.iter(|| black_box(multiply(&a, &b, algorithm).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_deep_recursion(c: &mut Criterion) {
    // Threshold 16 forces several recursion levels at sizes where the
    // default threshold would just run the base case, exposing the
    // slice/merge overhead both recursive algorithms pay.
    let mut group = c.benchmark_group("deep_recursion");
    group.sample_size(10);

    let n = 256;
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::random(n, &mut rng);
    let b = Matrix::random(n, &mut rng);

    group.bench_function(BenchmarkId::new("block_t16", n), |bench| {
        bench.iter(|| {
            black_box(blockmul::multiply::recursive::multiply_with_threshold(&a, &b, 16).unwrap())
        });
    });
    group.bench_function(BenchmarkId::new("strassen_t16", n), |bench| {
        bench.iter(|| {
            black_box(blockmul::multiply::strassen::multiply_with_threshold(&a, &b, 16).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_multipliers, bench_deep_recursion);
criterion_main!(benches);
