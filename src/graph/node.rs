//! Graph vertices and symmetric edge maintenance.
//!
//! Nodes live in a single table keyed by their [`NodeId`]. Edges are stored
//! on both endpoints as lists of ids rather than references, so the table is
//! the only owner and no reference cycles exist between nodes.

use std::collections::HashMap;

/// Identifier of a node, chosen by the author of the input (always >= 1).
pub type NodeId = u64;

/// The owning node table, keyed by node number.
pub type Nodes = HashMap<NodeId, Node>;

/// Direction of a dependency edge as written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// `left -> right`: left is depended upon by right
    Provide,
    /// `left <- right`: left depends on right
    Require,
}

impl EdgeKind {
    /// The arrow token used for this direction in the input language.
    pub fn arrow(&self) -> &'static str {
        match self {
            EdgeKind::Provide => "->",
            EdgeKind::Require => "<-",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provide => write!(f, "provide"),
            Self::Require => write!(f, "require"),
        }
    }
}

/// A single vertex of the dependency graph.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Author-assigned identifier, unique within a graph
    pub number: NodeId,
    /// Display label, whitespace-trimmed
    pub name: String,
    /// Nodes depending on this one, in declaration order
    pub provides: Vec<NodeId>,
    /// Nodes this one depends on, in declaration order
    pub requires: Vec<NodeId>,
}

impl Node {
    /// Creates a node with no edges.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depdot::graph::Node;
    ///
    /// let node = Node::new(3, "cranberry");
    /// assert_eq!(node.number, 3);
    /// assert!(node.provides.is_empty());
    /// ```
    pub fn new(number: NodeId, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            provides: Vec::new(),
            requires: Vec::new(),
        }
    }

    /// Compares name and number only; edges are ignored.
    pub fn equal(&self, other: &Node) -> bool {
        self.name == other.name && self.number == other.number
    }

    /// Returns true if the node has no edges in either direction.
    pub fn is_isolated(&self) -> bool {
        self.provides.is_empty() && self.requires.is_empty()
    }
}

/// Records that `left` provides `right` (`right` depends on `left`).
///
/// Appends `right` to `left.provides` and `left` to `right.requires`. If
/// `right` is already in `left.provides` nothing changes.
///
/// Preconditions: both ids are present in `nodes` and `left != right`. The
/// line parser checks both before calling; a missing endpoint leaves the
/// table untouched.
///
/// Returns `true` if a new edge was recorded.
pub fn add_provide(nodes: &mut Nodes, left: NodeId, right: NodeId) -> bool {
    link(nodes, left, right, EdgeKind::Provide)
}

/// Records that `left` requires `right` (`left` depends on `right`).
///
/// The mirror of [`add_provide`]: appends `right` to `left.requires` and
/// `left` to `right.provides`, idempotent on `right`'s id. Same
/// preconditions.
pub fn add_require(nodes: &mut Nodes, left: NodeId, right: NodeId) -> bool {
    link(nodes, left, right, EdgeKind::Require)
}

fn link(nodes: &mut Nodes, left: NodeId, right: NodeId, kind: EdgeKind) -> bool {
    debug_assert_ne!(left, right, "node {} cannot refer to itself", left);

    if !nodes.contains_key(&right) {
        return false;
    }
    let Some(source) = nodes.get_mut(&left) else {
        return false;
    };

    let outgoing = match kind {
        EdgeKind::Provide => &mut source.provides,
        EdgeKind::Require => &mut source.requires,
    };
    if outgoing.contains(&right) {
        return false;
    }
    outgoing.push(right);

    if let Some(target) = nodes.get_mut(&right) {
        match kind {
            EdgeKind::Provide => target.requires.push(left),
            EdgeKind::Require => target.provides.push(left),
        }
    }
    true
}
