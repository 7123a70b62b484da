use super::absorb::{absorb_all, absorb_range};
use super::mut_graph::MutGraph;
use super::spine::{SigmaSets, Spine, SpineArena};

pub(crate) const UNDISCOVERED: usize = usize::MAX;

/// Per-vertex traversal state, sized to one block.
#[derive(Debug)]
pub(crate) struct DfsState {
    pub pre: Vec<usize>,
    pub lowpt: Vec<usize>,
    pub father: Vec<Option<usize>>,
    pub arena: SpineArena,
    pub sigma: SigmaSets,
    time: usize,
}

impl DfsState {
    pub fn new(n: usize) -> Self {
        Self {
            pre: vec![UNDISCOVERED; n],
            lowpt: vec![0; n],
            father: vec![None; n],
            arena: SpineArena::new(n),
            sigma: SigmaSets::new(n),
            time: 0,
        }
    }
}

/// One suspended call of the traversal.
struct Frame {
    w: usize,
    parent: Option<usize>,
    cursor: usize,
    /// Tree edge whose child call is in flight, with the child itself.
    pending: Option<(usize, usize)>,
    spine: Spine,
}

impl Frame {
    fn enter(st: &mut DfsState, w: usize, parent: Option<usize>) -> Self {
        st.pre[w] = st.time;
        st.time += 1;
        st.lowpt[w] = st.pre[w];
        st.father[w] = parent;
        let spine = Spine::singleton(&mut st.arena, w);
        Frame {
            w,
            parent,
            cursor: 0,
            pending: None,
            spine,
        }
    }
}

/// Runs the absorption traversal over one block rooted at `root`,
/// implementing Tsin's 3-edge-connected component algorithm.
///
/// Frames live on an explicit stack, so the depth of the block never
/// touches the thread stack. When the run finishes, every vertex with a
/// non-empty `sigma` set represents one 3-edge-connected component of the
/// block.
pub(crate) fn triedge_dfs(g: &mut MutGraph, st: &mut DfsState, root: usize) {
    let mut stack = vec![Frame::enter(st, root, None)];
    let mut returned: Option<Spine> = None;

    while let Some(frame) = stack.last_mut() {
        if let Some((eid, u)) = frame.pending.take() {
            let child = returned.take().expect("child spine");
            finish_tree_edge(g, st, frame, eid, u, child);
        }

        let mut descend = None;
        while let Some(eid) = g.next_incident(frame.w, &mut frame.cursor) {
            let u = g.opposite(frame.w, eid);
            if Some(u) == frame.parent {
                continue;
            }
            if u == frame.w {
                // self-loop picked up along the way
                g.hide_edge(eid);
                continue;
            }
            if g.degree(u) < 2 {
                // endpoint emptied out by earlier contractions
                continue;
            }
            if st.pre[u] == UNDISCOVERED {
                frame.pending = Some((eid, u));
                descend = Some(u);
                break;
            }
            handle_back_edge(g, st, frame, u);
        }

        let w = frame.w;
        match descend {
            Some(u) => stack.push(Frame::enter(st, u, Some(w))),
            None => {
                let done = stack.pop().expect("frame");
                returned = Some(done.spine);
            }
        }
    }
}

/// Post-child step for the tree edge `eid` from `w` down to `u`: contract
/// `u` away if it degenerated to a path vertex, then either absorb the
/// child spine into `w` or adopt it as the tail of `w`'s own spine.
fn finish_tree_edge(
    g: &mut MutGraph,
    st: &mut DfsState,
    frame: &mut Frame,
    eid: usize,
    u: usize,
    mut child: Spine,
) {
    let w = frame.w;

    if g.degree(u) == 2 {
        // u kept exactly one edge besides the tree edge; contract the chain
        g.hide_edge(eid);
        let mut cursor = 0;
        if let Some(rest) = g.next_incident(u, &mut cursor) {
            let z = g.opposite(u, rest);
            if z == w {
                // a parallel edge back to w would turn into a self-loop
                g.hide_edge(rest);
            } else {
                g.move_edge(rest, w, z);
            }
        } else {
            debug_assert!(false, "contracted vertex {} has no surviving edge", u);
            log::warn!("contracted vertex {} has no surviving edge", u);
        }
        let popped = child.pop_front(&mut st.arena);
        debug_assert_eq!(popped, Some(u), "contracted vertex is not its spine head");
    }

    if st.lowpt[w] <= st.lowpt[u] {
        absorb_all(g, &mut st.arena, &mut st.sigma, w, &mut child);
    } else {
        st.lowpt[w] = st.lowpt[u];
        let mut residue = std::mem::replace(&mut frame.spine, Spine::empty());
        let head = residue.pop_front(&mut st.arena);
        debug_assert_eq!(head, Some(w));
        absorb_all(g, &mut st.arena, &mut st.sigma, w, &mut residue);
        frame.spine.concat(&mut st.arena, child);
        frame.spine.push_front(&mut st.arena, w);
    }
}

fn handle_back_edge(g: &mut MutGraph, st: &mut DfsState, frame: &mut Frame, u: usize) {
    let w = frame.w;
    if st.pre[u] < st.pre[w] {
        // outgoing: u is an ancestor
        if st.pre[u] < st.lowpt[w] {
            let mut residue = std::mem::replace(&mut frame.spine, Spine::empty());
            let head = residue.pop_front(&mut st.arena);
            debug_assert_eq!(head, Some(w));
            absorb_all(g, &mut st.arena, &mut st.sigma, w, &mut residue);
            st.lowpt[w] = st.pre[u];
            frame.spine = Spine::singleton(&mut st.arena, w);
        }
    } else {
        // incoming: a descendant reaches back to w, so its stretch of the
        // spine is now backed by two edge-disjoint routes
        absorb_range(g, &mut st.arena, &mut st.sigma, &mut frame.spine, w, u);
    }
}
