use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dwg_graph::Graph;

fn sample() -> Graph<u32, u32> {
    Graph::from_edges((0..10_000u32).map(|i| (i % 251, (i * 7) % 251, i % 13)))
}

fn iterate_bench(c: &mut Criterion) {
    let graph = sample();
    c.bench_function("iterate_forward", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for (_, _, weight) in graph.iter() {
                total += u64::from(*weight);
            }
            black_box(total);
        });
    });
    c.bench_function("iterate_backward", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for (_, _, weight) in graph.iter().rev() {
                total += u64::from(*weight);
            }
            black_box(total);
        });
    });
}

criterion_group!(benches, iterate_bench);
criterion_main!(benches);
