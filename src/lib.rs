//! depdot - dependency graph descriptions rendered as Graphviz DOT
//!
//! This crate parses a small line-oriented language of node declarations,
//! rendering options and dependency edges into an in-memory graph, and
//! serializes that graph to the Graphviz DOT language.
//!
//! # Example
//!
//! ```rust
//! use depdot::export::graphviz::graph_to_dot;
//! use depdot::parser::parse_str;
//!
//! let graph = parse_str("1: apple\n2: blueberry\ndependencies\n1 -> 2\n").unwrap();
//! let dot = graph_to_dot(&graph);
//!
//! assert!(dot.contains("\"apple\" -> \"blueberry\"\n"));
//! ```

pub mod export;
pub mod graph;
pub mod parser;
