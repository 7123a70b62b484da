use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use petgraph::visit::EdgeRef;

use crate::triedge::TriedgeComponents;
use crate::types::EdgeClass;
use crate::UnGraph;

/// Writes `graph` in the same format [`crate::input::from_str`] reads,
/// vertices numbered 1..=N.
pub fn write_graph<W: Write>(graph: &UnGraph, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", graph.node_count(), graph.edge_count())?;
    for e in graph.edge_references() {
        writeln!(out, "{} {}", e.source().index() + 1, e.target().index() + 1)?;
    }
    Ok(())
}

/// Writes the subgraph induced by `members`, vertices renumbered 1..=k.
pub fn write_component<W: Write>(
    graph: &UnGraph,
    members: &[usize],
    out: &mut W,
) -> io::Result<()> {
    let mut renumber = HashMap::with_capacity(members.len());
    for (i, &v) in members.iter().enumerate() {
        renumber.insert(v, i + 1);
    }
    let edges: Vec<(usize, usize)> = graph
        .edge_references()
        .filter_map(|e| {
            match (
                renumber.get(&e.source().index()),
                renumber.get(&e.target().index()),
            ) {
                (Some(&a), Some(&b)) => Some((a, b)),
                _ => None,
            }
        })
        .collect();
    writeln!(out, "{} {}", members.len(), edges.len())?;
    for (a, b) in edges {
        writeln!(out, "{} {}", a, b)?;
    }
    Ok(())
}

/// Writes one `comp<i>_<stem>` file per component of more than one vertex
/// into `dir` and returns the written paths.
pub fn write_component_files(
    graph: &UnGraph,
    result: &TriedgeComponents,
    dir: &Path,
    stem: &str,
) -> io::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (i, members) in result.components.iter().enumerate() {
        if members.len() <= 1 {
            continue;
        }
        let path = dir.join(format!("comp{}_{}", i, stem));
        let mut file = std::fs::File::create(&path)?;
        write_component(graph, members, &mut file)?;
        written.push(path);
    }
    Ok(written)
}

/// Returns the graph in DOT format, components shown as fill colors and
/// edges styled by their class.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &UnGraph, result: &TriedgeComponents) -> String {
    const PALETTE: [&str; 6] = [
        "lightblue",
        "lightpink",
        "palegreen",
        "khaki",
        "plum",
        "lightsalmon",
    ];
    let classes = result.edge_classes(graph);
    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled];\n");

    for v in graph.node_indices() {
        let label = graph.node_weight(v).copied().unwrap_or_default();
        let comp = result.component_of[v.index()];
        output.push_str(&format!(
            "  {} [label=\"{}\", fillcolor={}];\n",
            v.index(),
            label,
            PALETTE[comp % PALETTE.len()]
        ));
    }

    for e in graph.edge_references() {
        let class = classes[e.id().index()];
        if class == EdgeClass::Internal {
            output.push_str(&format!(
                "  {} -- {};\n",
                e.source().index(),
                e.target().index()
            ));
            continue;
        }
        let style = match class {
            EdgeClass::Bridge => "dashed",
            EdgeClass::Pendant => "dotted",
            _ => "bold",
        };
        output.push_str(&format!(
            "  {} -- {} [style={}, label=\"{}\"];\n",
            e.source().index(),
            e.target().index(),
            style,
            class
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes the DOT rendering to a file.
pub fn to_dot_file(graph: &UnGraph, result: &TriedgeComponents, path: &str) -> io::Result<()> {
    to_file(&draw_graph(graph, result), path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use crate::input::from_str;
    use crate::triedge::get_triedge_components;

    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let g = from_str("4 5\n1 2\n2 3\n3 4\n4 1\n1 3\n").unwrap();
        let mut buf = Vec::new();
        write_graph(&g, &mut buf).unwrap();
        let again = from_str(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(again.node_count(), g.node_count());
        assert_eq!(again.edge_count(), g.edge_count());
    }

    #[test]
    fn component_subgraph_is_renumbered() {
        let g = from_str("6 7\n1 2\n2 3\n3 1\n4 5\n5 6\n6 4\n3 4\n").unwrap();
        let res = get_triedge_components(&g);
        let comp = res.components.iter().find(|c| c.contains(&3)).unwrap();
        let mut buf = Vec::new();
        write_component(&g, comp, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("3 3\n"));
        let sub = from_str(&text).unwrap();
        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 3);
    }

    #[test]
    fn dot_output_styles_bridges() {
        let g = from_str("6 7\n1 2\n2 3\n3 1\n4 5\n5 6\n6 4\n3 4\n").unwrap();
        let res = get_triedge_components(&g);
        let dot = draw_graph(&g, &res);
        assert!(dot.starts_with("graph {"));
        assert_eq!(dot.matches("style=dashed").count(), 1);
        assert!(dot.contains("label=\"Bridge\""));
    }
}
