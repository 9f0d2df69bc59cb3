//! Node types for the structural diagram model.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Handle to a node owned by a [`Diagram`](crate::diagram::Diagram).
///
/// Ids are cheap to copy and stable for the lifetime of the diagram; a
/// node keeps its id even as siblings are added or removed. An id is only
/// meaningful to the diagram that issued it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// The kind of a diagram node, determining which viewer lays it out and
/// which diagram kinds accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A class in a class diagram
    Class,
    /// An interface in a class diagram
    Interface,
    /// A package grouping other class diagram nodes
    Package,
    /// An object instance in an object diagram
    Object,
    /// A named field inside an object
    Field,
    /// A named state in a state diagram
    State,
    /// The filled-circle initial pseudo-state
    InitialState,
    /// The ringed-circle final state
    FinalState,
    /// A stick-figure actor in a use case diagram
    Actor,
    /// An oval use case
    UseCase,
    /// A free-floating annotation note
    Note,
    /// A dimensionless anchor point for note connectors
    Point,
}

/// A diagram node: a shape instance with a position, a name, and an
/// ordered list of contained children.
///
/// Positions are absolute diagram coordinates, including for contained
/// children; moving a parent explicitly moves its subtree (see
/// [`Diagram::translate`](crate::diagram::Diagram::translate)). The
/// parent/child links are maintained exclusively by the owning diagram so
/// that both sides always stay consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    position: Point,
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Point::default(),
            name: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the kind of this node
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the absolute position of this node's top-left corner
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the name text of this node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent of this node, if it is contained in one
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the contained children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if this node contains no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
}
