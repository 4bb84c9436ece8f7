//! Graphviz DOT export.
//!
//! Output is deterministic: nodes are written in ascending number order and
//! each node's edges in the order they were declared. Names are written
//! verbatim between double quotes, so a name containing `"` yields invalid
//! DOT.

use super::Exporter;
use crate::graph::{DependencyGraph, Node};
use std::io::{self, Write};

/// Fixed preamble of every rendered graph.
pub const GRAPHVIZ_HEADER: &str = "digraph g{\nrankdir=LR;\nratio=fill;\nnode [style=filled];\n";

/// Closing line of every rendered graph.
pub const GRAPHVIZ_FOOTER: &str = "}\n";

/// Graphviz exporter implementation.
pub struct GraphvizExporter;

impl Exporter for GraphvizExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writer.write_all(graph_to_dot(graph).as_bytes())
    }
}

/// Renders one node: its own line followed by one line per provide edge.
///
/// Edge targets are resolved through `graph`.
///
/// # Example
///
/// ```rust
/// use depdot::export::graphviz::node_to_dot;
/// use depdot::graph::{DependencyGraph, Node};
///
/// let graph = DependencyGraph::new();
/// assert_eq!(node_to_dot(&Node::new(1, "some name"), &graph), "\"some name\"\n");
/// ```
pub fn node_to_dot(node: &Node, graph: &DependencyGraph) -> String {
    let mut result = format!("\"{}\"\n", node.name);

    for other in graph.provides_of(node.number) {
        result.push_str(&format!("\"{}\" -> \"{}\"\n", node.name, other.name));
    }

    result
}

/// Renders the whole graph as a DOT document.
///
/// Rendering options are not applied; the output depends only on nodes and
/// edges.
pub fn graph_to_dot(graph: &DependencyGraph) -> String {
    let body: String = graph
        .nodes_in_order()
        .into_iter()
        .map(|node| node_to_dot(node, graph))
        .collect();

    format!("{}{}{}", GRAPHVIZ_HEADER, body, GRAPHVIZ_FOOTER)
}
