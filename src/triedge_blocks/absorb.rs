use super::mut_graph::MutGraph;
use super::spine::{SigmaSets, Spine, SpineArena};

/// Absorbs the whole of `spine` into `x0`, which must not itself be on the
/// spine. Edges running along the absorbed subpath (or already pointing at
/// `x0`) are hidden, every other incident edge is reattached to `x0`, and
/// the absorbed vertex sets are merged. Leaves `spine` empty.
pub(crate) fn absorb_all(
    g: &mut MutGraph,
    arena: &mut SpineArena,
    sigma: &mut SigmaSets,
    x0: usize,
    spine: &mut Spine,
) {
    while let Some(xi) = spine.pop_back(arena) {
        let below = spine.tail().unwrap_or(x0);
        strip_and_rewire(g, x0, xi, below);
        sigma.absorb(x0, xi);
    }
}

/// Absorbs the subpath of `spine` between its head `x0` and `target`
/// inclusive, leaving the head and anything past `target` in place. A
/// `target` that is not on the spine makes this a no-op.
pub(crate) fn absorb_range(
    g: &mut MutGraph,
    arena: &mut SpineArena,
    sigma: &mut SigmaSets,
    spine: &mut Spine,
    x0: usize,
    target: usize,
) {
    debug_assert_eq!(spine.head(), Some(x0));
    if target == x0 {
        return;
    }
    if !spine.contains_from_tail(arena, target) {
        log::debug!("back edge source {} is not on the spine of {}", target, x0);
        return;
    }
    let mut xi = target;
    while xi != x0 {
        let below = arena.prev(xi);
        spine.remove(arena, xi);
        strip_and_rewire(g, x0, xi, below);
        sigma.absorb(x0, xi);
        xi = below;
    }
}

fn strip_and_rewire(g: &mut MutGraph, x0: usize, xi: usize, below: usize) {
    let mut cursor = 0;
    while let Some(e) = g.next_incident(xi, &mut cursor) {
        let z = g.opposite(xi, e);
        if z == below || z == x0 {
            g.hide_edge(e);
        } else {
            g.move_edge(e, x0, z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_all_rewires_and_merges() {
        // path 0-1-2 with a stray edge 2-3 and a back edge 2-0
        let mut g = MutGraph::new(4);
        let e01 = g.new_edge(0, 1);
        let e12 = g.new_edge(1, 2);
        let e23 = g.new_edge(2, 3);
        let e20 = g.new_edge(2, 0);
        let mut arena = SpineArena::new(4);
        let mut sigma = SigmaSets::new(4);
        let mut spine = Spine::singleton(&mut arena, 1);
        let tail = Spine::singleton(&mut arena, 2);
        spine.concat(&mut arena, tail);

        absorb_all(&mut g, &mut arena, &mut sigma, 0, &mut spine);

        assert!(spine.is_empty());
        assert_eq!(sigma.members(0), vec![0, 2, 1]);
        assert!(g.is_hidden(e01));
        assert!(g.is_hidden(e12));
        assert!(g.is_hidden(e20));
        assert_eq!(g.endpoints(e23), (0, 3));
    }

    #[test]
    fn absorb_range_leaves_prefix_and_suffix() {
        // spine 0-1-2-3, absorb 1..=2 into 0
        let mut g = MutGraph::new(5);
        let e01 = g.new_edge(0, 1);
        let e12 = g.new_edge(1, 2);
        let e24 = g.new_edge(2, 4);
        let mut arena = SpineArena::new(5);
        let mut sigma = SigmaSets::new(5);
        let mut spine = Spine::singleton(&mut arena, 3);
        spine.push_front(&mut arena, 2);
        spine.push_front(&mut arena, 1);
        spine.push_front(&mut arena, 0);

        absorb_range(&mut g, &mut arena, &mut sigma, &mut spine, 0, 2);

        assert_eq!(spine.to_vec(&arena), vec![0, 3]);
        assert_eq!(sigma.members(0), vec![0, 2, 1]);
        assert!(g.is_hidden(e01));
        assert!(g.is_hidden(e12));
        assert_eq!(g.endpoints(e24), (0, 4));
    }

    #[test]
    fn absorb_range_ignores_a_missing_target() {
        let mut g = MutGraph::new(3);
        g.new_edge(0, 1);
        let mut arena = SpineArena::new(3);
        let mut sigma = SigmaSets::new(3);
        let mut spine = Spine::singleton(&mut arena, 1);
        spine.push_front(&mut arena, 0);

        absorb_range(&mut g, &mut arena, &mut sigma, &mut spine, 0, 2);

        assert_eq!(spine.to_vec(&arena), vec![0, 1]);
        assert_eq!(sigma.members(2), vec![2]);
    }
}
