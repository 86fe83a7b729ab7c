use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tsp_ratio::approx::double_tree_tour;
use tsp_ratio::graph::{kruskal, Graph};

fn bench_double_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("double_tree");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for n in [10, 100, 500] {
        let graph = Graph::random_complete(n, 100.0, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, g| {
            b.iter(|| kruskal(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("tour", n), &graph, |b, g| {
            b.iter(|| double_tree_tour(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_double_tree);
criterion_main!(benches);
