use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tsp_ratio::graph::{brute_force_tsp, Graph};

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_tsp");
    group.sample_size(10);
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for n in [6, 8, 9] {
        let graph = Graph::random_complete(n, 100.0, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| brute_force_tsp(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_brute_force);
criterion_main!(benches);
