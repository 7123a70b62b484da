use log::{debug, trace};

use crate::connectivity::connected_components;
use crate::debugging;
use crate::splitter::split_graph;
use crate::triedge_blocks::dfs::{triedge_dfs, DfsState};
use crate::triedge_blocks::mut_graph::MutGraph;
use crate::types::EdgeClass;
use crate::UnGraph;

/// Everything the decomposition produces for one input graph.
///
/// Vertex values are node indices of the input graph, edge values are edge
/// indices of the input graph.
#[derive(Debug, Clone)]
pub struct TriedgeComponents {
    /// The 3-edge-connected components, one vertex set each.
    pub components: Vec<Vec<usize>>,
    /// Component index per vertex.
    pub component_of: Vec<usize>,
    /// Edges whose removal disconnects the graph, hidden before the
    /// per-block traversal.
    pub bridges: Vec<usize>,
    /// Edges joining two distinct components inside one block.
    pub cut_edges: Vec<usize>,
    /// Edges hidden by the degree-1 stripping that follows bridge removal.
    pub pendant_edges: Vec<usize>,
}

impl TriedgeComponents {
    /// Classifies every edge of the input graph.
    pub fn edge_classes(&self, graph: &UnGraph) -> Vec<EdgeClass> {
        let mut classes = vec![EdgeClass::Internal; graph.edge_count()];
        for &e in &self.bridges {
            classes[e] = EdgeClass::Bridge;
        }
        for &e in &self.pendant_edges {
            classes[e] = EdgeClass::Pendant;
        }
        for &e in &self.cut_edges {
            classes[e] = EdgeClass::Cut;
        }
        classes
    }
}

/// Computes the 3-edge-connected components of `in_graph`, together with
/// its bridges and cut-edges.
///
/// The input is copied into a scratch graph; the caller's graph is left
/// untouched. Running time is linear up to the absorption rewiring.
pub fn get_triedge_components(in_graph: &UnGraph) -> TriedgeComponents {
    let mut g = MutGraph::from_petgraph(in_graph);

    let (pieces, _) = connected_components(&g);
    if pieces > 1 {
        debug!("input graph has {} connected components", pieces);
    }

    let split = split_graph(&mut g);
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component_of = vec![usize::MAX; g.vertex_count()];

    for block in &split.blocks {
        decompose_block(&g, block, &mut components, &mut component_of);
    }

    let cut_edges: Vec<usize> = g
        .edge_ids()
        .filter(|&e| {
            let (s, t) = g.endpoints(e);
            component_of[s] != component_of[t]
        })
        .collect();

    debug!(
        "{} components, {} bridges, {} cut-edges",
        components.len(),
        split.bridges.len(),
        cut_edges.len()
    );

    TriedgeComponents {
        components,
        component_of,
        bridges: split.bridges,
        cut_edges,
        pendant_edges: split.pendant_edges,
    }
}

/// Emits the components of one block: trivial shapes directly, everything
/// else through the absorption traversal on an induced copy.
fn decompose_block(
    g: &MutGraph,
    block: &[usize],
    components: &mut Vec<Vec<usize>>,
    component_of: &mut [usize],
) {
    if block.is_empty() {
        return;
    }
    if block.len() == 1 {
        push_component(vec![block[0]], components, component_of);
        return;
    }

    let (mut h, to_parent) = g.induced(block);

    if h.visible_edge_count() == 1 {
        // not actually biconnected; keep the lone edge's endpoints together
        let e = h.edge_ids().next().expect("edge");
        let (s, t) = h.endpoints(e);
        push_component(vec![to_parent[s], to_parent[t]], components, component_of);
        return;
    }

    let Some(root) = h.vertices().find(|&v| h.degree(v) > 2) else {
        // every vertex has degree two, the block is a bare cycle
        push_component(block.to_vec(), components, component_of);
        return;
    };

    let mut st = DfsState::new(h.vertex_count());
    triedge_dfs(&mut h, &mut st, root);

    if log::log_enabled!(log::Level::Trace) {
        trace!(
            "block state after absorption:\n{}",
            debugging::draw(h.vertex_count(), &h.visible_edges(), &st.pre, &st.lowpt, &st.father)
        );
    }

    for v in h.vertices() {
        if !st.sigma.is_empty(v) {
            let members: Vec<usize> = st.sigma.members(v).iter().map(|&x| to_parent[x]).collect();
            push_component(members, components, component_of);
        }
    }
}

fn push_component(
    members: Vec<usize>,
    components: &mut Vec<Vec<usize>>,
    component_of: &mut [usize],
) {
    for &v in &members {
        component_of[v] = components.len();
    }
    components.push(members);
}
