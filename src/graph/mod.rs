//! Graph module for dependency relationship modeling.
//!
//! [`Node`] is the vertex type and carries its edges as id lists on both
//! endpoints. [`DependencyGraph`] owns the node table and the selected
//! rendering options.
//!
//! # Example
//!
//! ```rust
//! use depdot::graph::{DependencyGraph, Node};
//!
//! let mut graph = DependencyGraph::new();
//! graph.insert_node(Node::new(1, "apple"));
//! graph.insert_node(Node::new(2, "blueberry"));
//! graph.add_provide(1, 2);
//!
//! assert_eq!(graph.node(1).unwrap().provides, vec![2]);
//! assert_eq!(graph.node(2).unwrap().requires, vec![1]);
//! ```

mod dependency_graph;
mod node;

pub use dependency_graph::DependencyGraph;
pub use node::{add_provide, add_require, EdgeKind, Node, NodeId, Nodes};
