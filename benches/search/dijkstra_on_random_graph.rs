use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use route_core::{
    graph::{node_index, Graph},
    search::dijkstra::Dijkstra,
    util::test_graphs::graph_city_network,
};

criterion_group!(benches, city_network, random_graphs);
criterion_main!(benches);

fn random_graph(num_nodes: usize, num_edges: usize, rng: &mut StdRng) -> Graph {
    let mut g = Graph::with_capacity(num_nodes, num_edges);
    for _ in 0..num_edges {
        g.connect(
            rng.gen_range(0..num_nodes),
            rng.gen_range(0..num_nodes),
            rng.gen_range(1..1000),
        );
    }
    g
}

pub fn city_network(c: &mut Criterion) {
    let g = graph_city_network();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_city_network", "0->4"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(black_box(node_index(0)), black_box(node_index(4)));
            })
        },
    );
}

fn random_graphs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);

    let mut group = c.benchmark_group("dijkstra_on_random_graph");
    for num_nodes in [1_000, 10_000, 100_000].iter() {
        let g = random_graph(*num_nodes, num_nodes * 4, &mut rng);
        let queries: Vec<(usize, usize)> = (0..100)
            .map(|_| (rng.gen_range(0..*num_nodes), rng.gen_range(0..*num_nodes)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(num_nodes), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                for (s, t) in &queries {
                    black_box(dijkstra.search(node_index(*s), node_index(*t)));
                }
            })
        });
    }
    group.finish();
}
