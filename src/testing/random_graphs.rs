use petgraph::visit::NodeIndexable;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::UnGraph;

/// Generates a random undirected connected graph on a spanning-tree base.
/// Parallel edges are allowed, self-loops are not.
pub(crate) fn random_connected_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i as u32 + 1);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(graph.from_index(i), graph.from_index(j), ());
        }
    }

    let mut num_edges = n - 1;
    while num_edges < m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s == t {
            continue;
        }
        graph.add_edge(graph.from_index(s), graph.from_index(t), ());
        num_edges += 1;
    }

    graph
}
