/// Classification of an input edge once the decomposition has run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeClass {
    /// Both endpoints lie in the same 3-edge-connected component.
    Internal,
    /// Removing the edge disconnects the graph.
    Bridge,
    /// Hidden during the degree-1 stripping that follows bridge removal.
    Pendant,
    /// Joins two distinct components inside one block.
    Cut,
}

impl std::fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeClass::Internal => write!(f, "Internal"),
            EdgeClass::Bridge => write!(f, "Bridge"),
            EdgeClass::Pendant => write!(f, "Pendant"),
            EdgeClass::Cut => write!(f, "Cut"),
        }
    }
}

/// Wrapper for petgraph's graph type. Node weights carry the caller's
/// 1-based vertex labels.
pub type UnGraph = petgraph::graph::UnGraph<u32, ()>;
