use fixedbitset::FixedBitSet;
use petgraph::visit::EdgeRef;

use crate::UnGraph;

/// Mutable scratch graph the decomposition runs on.
///
/// Edges keep their id for life. Hiding removes an edge from adjacency
/// iteration and degree counts without giving up its identity, and
/// [`move_edge`](MutGraph::move_edge) rewrites the endpoints of a live edge
/// in place. Adjacency entries are append-only, so a cursor captured before
/// a mutation stays valid; entries whose edge has been hidden or relocated
/// away are skipped when the cursor lands on them.
#[derive(Debug, Clone)]
pub struct MutGraph {
    adj: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    hidden: FixedBitSet,
    deg: Vec<usize>,
}

impl MutGraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
            hidden: FixedBitSet::new(),
            deg: vec![0; n],
        }
    }

    /// Copies a caller graph into the arena. Edge ids match petgraph edge
    /// indices; self-loops are hidden on sight.
    pub fn from_petgraph(graph: &UnGraph) -> Self {
        let mut g = Self::new(graph.node_count());
        for e in graph.edge_references() {
            let eid = g.new_edge(e.source().index(), e.target().index());
            debug_assert_eq!(eid, e.id().index());
            if e.source() == e.target() {
                log::debug!("hiding self-loop {} at input", eid);
                g.hide_edge(eid);
            }
        }
        g
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edge slots ever created, hidden ones included.
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    pub fn visible_edge_count(&self) -> usize {
        self.edges.len() - self.hidden.count_ones(..)
    }

    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.adj.len()
    }

    /// Visible edge ids in increasing order.
    pub fn edge_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.edges.len()).filter(move |&e| !self.hidden.contains(e))
    }

    pub fn new_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.deg.push(0);
        self.adj.len() - 1
    }

    pub fn new_edge(&mut self, u: usize, v: usize) -> usize {
        let eid = self.edges.len();
        self.edges.push((u, v));
        self.hidden.grow(eid + 1);
        self.adj[u].push(eid);
        if v != u {
            self.adj[v].push(eid);
        }
        self.deg[u] += 1;
        self.deg[v] += 1;
        eid
    }

    pub fn endpoints(&self, e: usize) -> (usize, usize) {
        self.edges[e]
    }

    pub fn is_hidden(&self, e: usize) -> bool {
        self.hidden.contains(e)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.deg[v]
    }

    pub fn opposite(&self, v: usize, e: usize) -> usize {
        let (s, t) = self.edges[e];
        debug_assert!(v == s || v == t, "vertex {} is not on edge {}", v, e);
        s ^ t ^ v
    }

    /// Removes the edge from iteration and degree counts, keeping its
    /// identity. Hiding twice is a bug.
    pub fn hide_edge(&mut self, e: usize) {
        debug_assert!(!self.hidden.contains(e), "edge {} is already hidden", e);
        if self.hidden.contains(e) {
            log::warn!("ignoring hide of already hidden edge {}", e);
            return;
        }
        self.hidden.insert(e);
        let (s, t) = self.edges[e];
        self.deg[s] -= 1;
        self.deg[t] -= 1;
    }

    /// Rewrites the endpoints of a live edge to `(u, v)`. The edge stays
    /// visible; old endpoints keep a stale adjacency entry that iteration
    /// skips.
    pub fn move_edge(&mut self, e: usize, u: usize, v: usize) {
        debug_assert!(!self.hidden.contains(e), "moving hidden edge {}", e);
        debug_assert!(u != v, "moving edge {} onto a self-loop at {}", e, u);
        if self.hidden.contains(e) || u == v {
            log::warn!("skipping invalid move of edge {} to ({}, {})", e, u, v);
            return;
        }
        let (s, t) = self.edges[e];
        self.deg[s] -= 1;
        self.deg[t] -= 1;
        self.deg[u] += 1;
        self.deg[v] += 1;
        self.edges[e] = (u, v);
        if u != s && u != t {
            self.adj[u].push(e);
        }
        if v != s && v != t {
            self.adj[v].push(e);
        }
    }

    /// Restores every hidden edge.
    pub fn clear_hidden_flags(&mut self) {
        for e in self.hidden.ones().collect::<Vec<_>>() {
            let (s, t) = self.edges[e];
            self.deg[s] += 1;
            self.deg[t] += 1;
        }
        self.hidden.clear();
    }

    fn entry_is_live(&self, v: usize, e: usize) -> bool {
        if self.hidden.contains(e) {
            return false;
        }
        let (s, t) = self.edges[e];
        v == s || v == t
    }

    /// Visible incident edges of `v`, in adjacency order.
    pub fn incident(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v]
            .iter()
            .copied()
            .filter(move |&e| self.entry_is_live(v, e))
    }

    /// Next-cursor iteration: returns the first live incident edge at or
    /// after `*cursor` and advances the cursor past it. The caller is then
    /// free to hide or relocate the returned edge.
    pub fn next_incident(&self, v: usize, cursor: &mut usize) -> Option<usize> {
        while *cursor < self.adj[v].len() {
            let e = self.adj[v][*cursor];
            *cursor += 1;
            if self.entry_is_live(v, e) {
                return Some(e);
            }
        }
        None
    }

    /// Subgraph induced by `vertices` (visible edges only), plus the map
    /// from its vertex ids back to ids of `self`.
    pub fn induced(&self, vertices: &[usize]) -> (MutGraph, Vec<usize>) {
        let mut local = vec![usize::MAX; self.vertex_count()];
        for (i, &v) in vertices.iter().enumerate() {
            local[v] = i;
        }
        let mut sub = MutGraph::new(vertices.len());
        for e in self.edge_ids() {
            let (s, t) = self.edges[e];
            if local[s] != usize::MAX && local[t] != usize::MAX {
                sub.new_edge(local[s], local[t]);
            }
        }
        (sub, vertices.to_vec())
    }

    /// Visible edges with their endpoints, for rendering.
    pub fn visible_edges(&self) -> Vec<(usize, (usize, usize))> {
        self.edge_ids().map(|e| (e, self.edges[e])).collect()
    }
}
