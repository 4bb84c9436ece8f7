//! The parsed graph: node table plus selected rendering options.
//!
//! The node table is a hash map and has no intrinsic order. Every consumer
//! that needs deterministic output goes through [`DependencyGraph::order_nodes`].

use super::node::{self, Node, NodeId, Nodes};
use crate::parser::RenderOption;

/// A dependency graph built from the input language.
///
/// # Example
///
/// ```rust
/// use depdot::graph::{DependencyGraph, Node};
///
/// let mut graph = DependencyGraph::new();
/// graph.insert_node(Node::new(5, "cranberry"));
/// graph.insert_node(Node::new(1, "apple"));
/// graph.add_provide(1, 5);
///
/// assert_eq!(graph.order_nodes(), vec![1, 5]);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Owning table of nodes keyed by number
    nodes: Nodes,
    /// Selected options in declaration order, duplicates kept
    options: Vec<RenderOption>,
}

impl DependencyGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under its number, returning any node it replaced.
    ///
    /// The replaced node's edges are dropped with it; callers only insert
    /// before edges are added.
    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.number, node)
    }

    /// Appends a selected option.
    pub fn push_option(&mut self, option: RenderOption) {
        self.options.push(option);
    }

    /// Records `left -> right`. See [`node::add_provide`].
    pub fn add_provide(&mut self, left: NodeId, right: NodeId) -> bool {
        node::add_provide(&mut self.nodes, left, right)
    }

    /// Records `left <- right`. See [`node::add_require`].
    pub fn add_require(&mut self, left: NodeId, right: NodeId) -> bool {
        node::add_require(&mut self.nodes, left, right)
    }

    /// Looks up a node by number.
    pub fn node(&self, number: NodeId) -> Option<&Node> {
        self.nodes.get(&number)
    }

    /// Returns true if a node with this number exists.
    pub fn contains(&self, number: NodeId) -> bool {
        self.nodes.contains_key(&number)
    }

    /// Read access to the raw node table.
    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Selected options, in the order they were declared.
    pub fn options(&self) -> &[RenderOption] {
        &self.options
    }

    /// Returns true if `option` was selected at least once.
    pub fn has_option(&self, option: RenderOption) -> bool {
        self.options.contains(&option)
    }

    /// All node numbers sorted ascending.
    ///
    /// Recomputed on every call; this is the only source of ordering for
    /// output.
    pub fn order_nodes(&self) -> Vec<NodeId> {
        let mut keys: Vec<NodeId> = self.nodes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// All nodes in ascending number order.
    pub fn nodes_in_order(&self) -> Vec<&Node> {
        self.order_nodes()
            .into_iter()
            .filter_map(|number| self.nodes.get(&number))
            .collect()
    }

    /// Nodes that depend on `number`, in edge declaration order.
    ///
    /// Returns an empty list if the node doesn't exist.
    pub fn provides_of(&self, number: NodeId) -> Vec<&Node> {
        self.resolve(number, |n| n.provides.as_slice())
    }

    /// Nodes that `number` depends on, in edge declaration order.
    pub fn requires_of(&self, number: NodeId) -> Vec<&Node> {
        self.resolve(number, |n| n.requires.as_slice())
    }

    fn resolve<F>(&self, number: NodeId, edges: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> &[NodeId],
    {
        match self.nodes.get(&number) {
            Some(node) => edges(node)
                .iter()
                .filter_map(|id| self.nodes.get(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges.
    ///
    /// Each edge is stored on both endpoints; only the provide side is
    /// counted.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.provides.len()).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
