//! Plain-text summary of a parsed graph, for debugging input files.

use super::Exporter;
use crate::graph::{DependencyGraph, Node};
use std::io::{self, Write};

/// Summary exporter implementation.
pub struct SummaryExporter;

impl SummaryExporter {
    fn write_node<W: Write>(node: &Node, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{} {}", node.name, node.number)?;

        write!(writer, "  -> ")?;
        for number in &node.provides {
            write!(writer, "{} ", number)?;
        }
        writeln!(writer)?;

        write!(writer, "  <- ")?;
        for number in &node.requires {
            write!(writer, "{} ", number)?;
        }
        writeln!(writer)
    }
}

impl Exporter for SummaryExporter {
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "nodes")?;
        for node in graph.nodes_in_order() {
            Self::write_node(node, writer)?;
        }

        writeln!(writer, "options")?;
        for option in graph.options() {
            writeln!(writer, "  {:<15} - {}", option.name(), option.color())?;
        }

        Ok(())
    }
}
