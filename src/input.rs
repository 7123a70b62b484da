use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

use petgraph::visit::NodeIndexable;
use thiserror::Error;

use crate::UnGraph;

/// Ways the reader can reject an input stream.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header line with vertex and edge counts")]
    MissingHeader,
    #[error("malformed header {0:?}, expected vertex and edge counts")]
    BadHeader(String),
    #[error("token {text:?} is not a vertex id")]
    BadToken { text: String },
    #[error("vertex {id} outside 1..={max}")]
    VertexOutOfRange { id: usize, max: usize },
    #[error("edge list ends after {found} of {declared} edges")]
    MissingEdges { declared: usize, found: usize },
}

/// Equivalent to [`from_str`], reading from a file path.
pub fn from_file(path: &str) -> Result<UnGraph, InputError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Reads a graph from a string.
///
/// Format: one header line `N M`, then `M` whitespace-separated vertex
/// pairs (line breaks between pairs are conventional, not required).
/// Vertices are numbered `1..=N`. Anything after `M` on the header line is
/// ignored, as is content past the `M`-th edge.
///
/// Example input:
/// ```text
/// 4 5
/// 1 2
/// 2 3
/// 3 4
/// 4 1
/// 1 3
/// ```
pub fn from_str(input: &str) -> Result<UnGraph, InputError> {
    parse(BufReader::new(Cursor::new(input)))
}

fn parse<R: BufRead>(reader: R) -> Result<UnGraph, InputError> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(InputError::MissingHeader),
        }
    };
    let mut header_tokens = header.split_whitespace();
    let n: usize = match header_tokens.next().map(str::parse) {
        Some(Ok(n)) => n,
        _ => return Err(InputError::BadHeader(header.clone())),
    };
    let m: usize = match header_tokens.next().map(str::parse) {
        Some(Ok(m)) => m,
        _ => return Err(InputError::BadHeader(header.clone())),
    };

    let mut graph = UnGraph::with_capacity(n, m);
    for i in 0..n {
        graph.add_node(i as u32 + 1);
    }
    if m == 0 {
        return Ok(graph);
    }

    let mut pending: Option<usize> = None;
    let mut found = 0usize;
    'read: for line in lines {
        let line = line?;
        for token in line.split_whitespace() {
            let id: usize = token.parse().map_err(|_| InputError::BadToken {
                text: token.to_string(),
            })?;
            if id == 0 || id > n {
                return Err(InputError::VertexOutOfRange { id, max: n });
            }
            match pending.take() {
                None => pending = Some(id),
                Some(first) => {
                    graph.add_edge(graph.from_index(first - 1), graph.from_index(id - 1), ());
                    found += 1;
                    if found == m {
                        break 'read;
                    }
                }
            }
        }
    }
    if found < m {
        return Err(InputError::MissingEdges {
            declared: m,
            found,
        });
    }
    Ok(graph)
}
