use petgraph::visit::NodeIndexable;

use crate::UnGraph;

/// Cycle on `n >= 2` vertices; `n == 2` gives a doubled edge.
pub(crate) fn cycle_graph(n: usize) -> UnGraph {
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32 + 1);
    }
    for i in 0..n {
        graph.add_edge(graph.from_index(i), graph.from_index((i + 1) % n), ());
    }
    graph
}

/// Complete simple graph on `n` vertices.
pub(crate) fn complete_graph(n: usize) -> UnGraph {
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32 + 1);
    }
    for u in 0..n {
        for v in u + 1..n {
            graph.add_edge(graph.from_index(u), graph.from_index(v), ());
        }
    }
    graph
}
