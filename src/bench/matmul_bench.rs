use cache_matmul::{Algorithm, MatrixView, MatrixViewMut};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INPUT_SIZES: &[usize] = &[64, 128, 256];

fn make_matrix(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n * n).map(|_| rng.gen_range(-1.0f32..=1.0)).collect()
}

fn bench_variant(c: &mut Criterion, algorithm: Algorithm) {
    let mut group = c.benchmark_group(algorithm.to_string());
    for &n in INPUT_SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));

        let a = make_matrix(n, 0xC0FF_EE42 ^ n as u64);
        let b = make_matrix(n, 0xBADC_0FFE ^ (n as u64).rotate_left(17));
        let mut out = vec![0.0f32; n * n];
        let sample = (n / 2) * n + (n / 2);

        let av = MatrixView::new(&a, n, n).unwrap();
        let bv = MatrixView::new(&b, n, n).unwrap();

        group.bench_function(BenchmarkId::from_parameter(n), |bench| {
            bench.iter(|| {
                let mut cv = MatrixViewMut::new(black_box(&mut out), n, n).unwrap();
                algorithm
                    .multiply(black_box(&av), black_box(&bv), &mut cv)
                    .unwrap();
                black_box(out[sample]);
            });
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    for algorithm in Algorithm::reference_suite() {
        bench_variant(c, algorithm);
    }
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
