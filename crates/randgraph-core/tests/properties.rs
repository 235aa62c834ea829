//! Structural properties of generated graphs, checked across seeds and sizes.

use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rstest::rstest;

use randgraph_core::{
    compute_degrees, generate_edges, generate_nodes, is_connected, Connectivity, Edge,
    GenerationParams, GraphModel,
};

fn generate(seed: u64, node_count: usize, radius: f32, connectivity: Connectivity) -> GraphModel {
    let mut rng = StdRng::seed_from_u64(seed);
    GraphModel::generate(
        GenerationParams::new(node_count, radius, connectivity),
        &mut rng,
    )
    .expect("valid parameters")
}

fn connectivity_strategy() -> impl Strategy<Value = Connectivity> {
    prop_oneof![Just(Connectivity::Connected), Just(Connectivity::Disconnected)]
}

proptest! {
    #[test]
    fn edges_are_simple(
        seed in any::<u64>(),
        n in 1usize..=10,
        mode in connectivity_strategy(),
    ) {
        let g = generate(seed, n, 0.05, mode);
        let edges = g.edges();
        for (i, e) in edges.iter().enumerate() {
            prop_assert_ne!(e.a, e.b);
            prop_assert!(e.a < n && e.b < n);
            for other in &edges[i + 1..] {
                prop_assert!(!e.same_pair(other), "duplicate {} / {}", e, other);
            }
        }
    }

    #[test]
    fn positions_stay_inside_border(
        seed in any::<u64>(),
        n in 1usize..=10,
        radius in 0.001f32..0.999,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for node in generate_nodes(n, radius, &mut rng) {
            for c in [node.position.x, node.position.y] {
                prop_assert!(c >= -1.0 + radius && c <= 1.0 - radius, "{} outside for r={}", c, radius);
            }
        }
    }

    #[test]
    fn degrees_match_incident_edges(
        seed in any::<u64>(),
        n in 1usize..=10,
        mode in connectivity_strategy(),
    ) {
        let g = generate(seed, n, 0.05, mode);
        for (i, node) in g.nodes().iter().enumerate() {
            let incident = g.edges().iter().filter(|e| e.touches(i)).count();
            prop_assert_eq!(node.degree, incident);
        }
        prop_assert_eq!(g.total_degree(), 2 * g.edge_count());
    }

    #[test]
    fn connected_mode_is_always_connected(seed in any::<u64>(), n in 1usize..=10) {
        let g = generate(seed, n, 0.05, Connectivity::Connected);
        prop_assert!(g.is_connected());
        prop_assert!(g.edge_count() >= n - 1);
    }

    #[test]
    fn disconnected_mode_is_never_connected(seed in any::<u64>(), n in 2usize..=10) {
        let g = generate(seed, n, 0.05, Connectivity::Disconnected);
        let split = n / 2;
        prop_assert!(!g.is_connected());
        for e in g.edges() {
            prop_assert_eq!(e.a < split, e.b < split, "edge {} crosses split {}", e, split);
        }
    }

    #[test]
    fn connectivity_ignores_edge_order(
        seed in any::<u64>(),
        n in 1usize..=10,
        mode in connectivity_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = generate_edges(n, mode, &mut rng);
        let expected = is_connected(n, &edges);
        for _ in 0..4 {
            edges.shuffle(&mut rng);
            prop_assert_eq!(is_connected(n, &edges), expected);
        }
    }

    #[test]
    fn dfs_agrees_with_component_count(
        seed in any::<u64>(),
        n in 1usize..=10,
        mode in connectivity_strategy(),
    ) {
        let g = generate(seed, n, 0.05, mode);
        prop_assert_eq!(g.is_connected(), g.component_count() == 1);
    }
}

#[test]
fn single_node_graph() {
    let g = generate(1, 1, 0.05, Connectivity::Connected);
    assert_eq!(g.edge_count(), 0);
    assert!(g.is_connected());
    assert_eq!(g.degrees(), vec![0]);
    assert!(g.adjacency(0).is_empty());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn five_connected_nodes(#[case] seed: u64) {
    let g = generate(seed, 5, 0.05, Connectivity::Connected);
    assert!(g.edge_count() >= 4);
    assert!(g.is_connected());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn four_disconnected_nodes(#[case] seed: u64) {
    let g = generate(seed, 4, 0.05, Connectivity::Disconnected);
    let left = Edge::new(0, 1);
    let right = Edge::new(2, 3);
    assert!(g
        .edges()
        .iter()
        .all(|e| e.same_pair(&left) || e.same_pair(&right)));
    assert!(!g.is_connected());
}

#[rstest]
#[case(2)]
#[case(3)]
fn small_disconnected_graphs(#[case] n: usize) {
    for seed in 0..32 {
        let g = generate(seed, n, 0.05, Connectivity::Disconnected);
        assert!(!g.is_connected(), "n={n} seed={seed} produced a connected graph");
        // Node 0 is alone in the first half.
        assert!(g.adjacency(0).is_empty());
    }
}

#[test]
fn degree_tally_is_not_incremental() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut g = GraphModel::generate(GenerationParams::new(10, 0.05, Connectivity::Connected), &mut rng)
        .expect("valid parameters");
    g.regenerate(GenerationParams::new(3, 0.05, Connectivity::Connected), &mut rng)
        .expect("valid parameters");
    assert_eq!(g.degrees(), compute_degrees(3, g.edges()));
}
