//! Export functionality for parsed dependency graphs.
//!
//! This module provides exporters for writing a graph out as Graphviz DOT
//! or as a plain-text summary for debugging.

pub mod graphviz;
pub mod summary;

use crate::graph::DependencyGraph;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Graphviz DOT, for rendering with `dot` and friends
    #[default]
    Dot,
    /// Human-readable listing of nodes, edges and options
    Summary,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            "summary" | "show" => Ok(ExportFormat::Summary),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: dot, summary",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()>;
}

/// Export the graph in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    graph: &DependencyGraph,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Dot => graphviz::GraphvizExporter.export(graph, writer),
        ExportFormat::Summary => summary::SummaryExporter.export(graph, writer),
    }
}

/// Export the graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &DependencyGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
