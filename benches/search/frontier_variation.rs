use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_core::{edge, prelude::*};
use rand::{rngs::StdRng, Rng, SeedableRng};

criterion_group!(benches, frontier_variation);
criterion_main!(benches);

/// `side` x `side` grid with random weights in [1, 10)
fn grid_graph(side: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                edges.push(edge!(id, id + 1, rng.gen_range(1.0..10.0)));
            }
            if row + 1 < side {
                edges.push(edge!(id, id + side, rng.gen_range(1.0..10.0)));
            }
        }
    }
    Graph::from_edges(edges)
}

fn frontier_variation(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_variation");
    for side in [10, 30, 60] {
        let g = grid_graph(side);
        let target = side * side - 1;

        group.bench_with_input(BenchmarkId::new("linear", side * side), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.shortest_path(&0, &target).unwrap());
            })
        });
        group.bench_with_input(BenchmarkId::new("heap", side * side), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::<_, HeapFrontier>::with_frontier(g);
                black_box(dijkstra.shortest_path(&0, &target).unwrap());
            })
        });
    }
    group.finish();
}
