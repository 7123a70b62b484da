use log::{debug, warn};

use crate::connectivity::{biconnected_edge_components, connected_components};
use crate::triedge_blocks::mut_graph::MutGraph;

/// Outcome of the pre-pass. `bridges` and `pendant_edges` are hidden in the
/// graph by the time this is returned; `blocks` are the vertex sets of the
/// surviving connected pieces.
#[derive(Debug, Clone)]
pub struct SplitGraph {
    pub bridges: Vec<usize>,
    pub blocks: Vec<Vec<usize>>,
    pub pendant_edges: Vec<usize>,
}

/// Hides every bridge of `g`, then iteratively hides edges left dangling at
/// degree-1 vertices, and returns the connected blocks of what is left.
///
/// A bridge is a biconnected component of exactly one edge.
pub fn split_graph(g: &mut MutGraph) -> SplitGraph {
    let (block_count, ecomp) = biconnected_edge_components(g);
    let mut block_size = vec![0usize; block_count];
    for e in g.edge_ids() {
        block_size[ecomp[e]] += 1;
    }
    let bridges: Vec<usize> = g
        .edge_ids()
        .filter(|&e| block_size[ecomp[e]] == 1)
        .collect();

    for &e in &bridges {
        let (s, t) = g.endpoints(e);
        if g.degree(s) <= 2 && g.degree(t) <= 2 {
            warn!("questionable bridge ({}, {}) between low-degree endpoints", s, t);
        }
        g.hide_edge(e);
    }

    let mut pendant_edges = Vec::new();
    loop {
        let mut found = false;
        for v in g.vertices() {
            if g.degree(v) == 1 {
                let mut cursor = 0;
                if let Some(e) = g.next_incident(v, &mut cursor) {
                    pendant_edges.push(e);
                    g.hide_edge(e);
                    found = true;
                }
            }
        }
        if !found {
            break;
        }
    }

    let (count, comp) = connected_components(g);
    if !bridges.is_empty() && count > 1 {
        debug!(
            "graph falls apart into {} blocks after hiding {} bridges",
            count,
            bridges.len()
        );
    }
    let mut blocks = vec![Vec::new(); count];
    for v in g.vertices() {
        blocks[comp[v]].push(v);
    }

    SplitGraph {
        bridges,
        blocks,
        pendant_edges,
    }
}
