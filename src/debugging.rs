use dot::{Edges, GraphWalk, Labeller, Nodes};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    id: usize,
    source: Node,
    target: Node,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    pre: &'a [usize],
    lowpt: &'a [usize],
    father: &'a [Option<usize>],
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("B").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let pre = if self.pre[*n] == usize::MAX {
            "-".to_string()
        } else {
            self.pre[*n].to_string()
        };
        dot::LabelText::label(format!(
            "{}\npre:{} low:{}\nfather:{}",
            n,
            pre,
            self.lowpt[*n],
            match self.father[*n] {
                Some(f) => f.to_string(),
                None => "root".to_string(),
            }
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", e.id))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the visible part of a block with the traversal state attached
/// to every vertex.
pub fn draw(
    n: usize,
    visible_edges: &[(usize, (usize, usize))],
    pre: &[usize],
    lowpt: &[usize],
    father: &[Option<usize>],
) -> String {
    let graph = Graph {
        nodes: (0..n).collect(),
        edges: visible_edges
            .iter()
            .map(|&(id, (source, target))| Edge { id, source, target })
            .collect(),
        pre,
        lowpt,
        father,
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
