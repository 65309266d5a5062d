use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dwg_graph::Graph;

fn edges(count: u32) -> Vec<(u32, u32, u32)> {
    (0..count)
        .map(|i| (i % 251, (i * 7) % 251, i % 13))
        .collect()
}

fn build_graph_bench(c: &mut Criterion) {
    let input = edges(10_000);
    c.bench_function("build_graph_10k", |b| {
        b.iter(|| {
            let graph: Graph<u32, u32> = Graph::from_edges(input.iter().copied());
            black_box(graph);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
