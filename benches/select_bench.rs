use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use segment_select::{find_eligible_nodes, find_path_between, NetGraph, NodeHandle};
use std::hint::black_box;

/// Baut eine Kette von `count` Grad-2-Nodes (Worst Case für den Flood-Fill).
fn build_synthetic_chain(count: usize) -> (NetGraph, Vec<NodeHandle>) {
    let mut graph = NetGraph::new();
    let nodes: Vec<_> = (0..count)
        .map(|i| {
            let column = (i % 1000) as f32;
            let row = (i / 1000) as f32;
            graph.add_node(Vec2::new(column * 10.0, row * 10.0))
        })
        .collect();
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1]).expect("Kette sollte entstehen");
    }
    (graph, nodes)
}

/// Baut ein Gitter: jeder innere Node ist eine Kreuzung (Grad 4).
fn build_synthetic_grid(side: usize) -> (NetGraph, Vec<NodeHandle>) {
    let mut graph = NetGraph::new();
    let nodes: Vec<_> = (0..side * side)
        .map(|i| {
            let x = (i % side) as f32;
            let y = (i / side) as f32;
            graph.add_node(Vec2::new(x * 10.0, y * 10.0))
        })
        .collect();
    for y in 0..side {
        for x in 0..side {
            let index = y * side + x;
            if x + 1 < side {
                graph.add_edge(nodes[index], nodes[index + 1]).unwrap();
            }
            if y + 1 < side {
                graph.add_edge(nodes[index], nodes[index + side]).unwrap();
            }
        }
    }
    (graph, nodes)
}

fn bench_eligibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("eligibility");

    for &node_count in &[1_000usize, 10_000usize] {
        let (graph, nodes) = build_synthetic_chain(node_count);
        group.bench_with_input(
            BenchmarkId::new("chain_flood_fill", node_count),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let eligible = find_eligible_nodes(graph, black_box(nodes[0]));
                    black_box(eligible.len())
                })
            },
        );
    }

    // Gitter: Flood-Fill stoppt sofort an den umliegenden Kreuzungen.
    let (graph, nodes) = build_synthetic_grid(100);
    let center = nodes[50 * 100 + 50];
    group.bench_function("grid_bounded_flood_fill", |b| {
        b.iter(|| {
            let eligible = find_eligible_nodes(&graph, black_box(center));
            black_box(eligible.len())
        })
    });

    group.finish();
}

fn bench_pathfind(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathfind");

    for &node_count in &[1_000usize, 10_000usize] {
        let (graph, nodes) = build_synthetic_chain(node_count);
        let start = nodes[0];
        let end = nodes[node_count - 1];
        group.bench_with_input(
            BenchmarkId::new("chain_end_to_end", node_count),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let path = find_path_between(graph, black_box(start), black_box(end));
                    black_box(path.map(|p| p.len()))
                })
            },
        );
    }

    let (graph, nodes) = build_synthetic_grid(100);
    let start = nodes[0];
    let end = nodes[nodes.len() - 1];
    group.bench_function("grid_corner_to_corner", |b| {
        b.iter(|| {
            let path = find_path_between(&graph, black_box(start), black_box(end));
            black_box(path.map(|p| p.len()))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_eligibility, bench_pathfind);
criterion_main!(benches);
