//! The structural diagram model.
//!
//! This module contains the element graph a diagram editor mutates:
//!
//! - [`Diagram`] - Owner of all nodes and edges of one diagram
//! - [`Node`] / [`NodeId`] / [`NodeKind`] - Shape instances with containment
//! - [`Edge`] / [`EdgeId`] / [`EdgeKind`] - Typed connectors between nodes
//! - [`DiagramKind`] - Per-diagram allow-lists of node and edge kinds
//!
//! # Ownership model
//!
//! Nodes and edges live in arenas owned by their [`Diagram`]; the rest of
//! the system refers to them through copyable [`NodeId`] / [`EdgeId`]
//! handles. Keeping both sides of the parent/child relationship inside one
//! owner lets every mutator update them in a single `&mut self` call, so
//! no observer can ever see a child listed under two parents or holding a
//! stale parent reference.
//!
//! # Pipeline position
//!
//! ```text
//! Diagram (this module)
//!     ↓ viewers
//! Bounds + connection points
//!     ↓ layout
//! Edge priorities + routed paths
//!     ↓ export
//! SVG snapshot
//! ```

mod edge;
mod node;

pub use edge::{AggregationKind, Edge, EdgeId, EdgeKind, GeneralizationKind};
pub use node::{Node, NodeId, NodeKind};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::MaquetteError;
use crate::geometry::Point;

/// The kind of a diagram, restricting which elements it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    Class,
    Object,
    State,
    UseCase,
}

impl DiagramKind {
    /// Returns true if nodes of the given kind may be added to this
    /// diagram kind. Notes and note anchor points are accepted everywhere.
    pub fn allows_node(self, kind: NodeKind) -> bool {
        if matches!(kind, NodeKind::Note | NodeKind::Point) {
            return true;
        }
        match self {
            DiagramKind::Class => matches!(
                kind,
                NodeKind::Class | NodeKind::Interface | NodeKind::Package
            ),
            DiagramKind::Object => matches!(kind, NodeKind::Object | NodeKind::Field),
            DiagramKind::State => matches!(
                kind,
                NodeKind::State | NodeKind::InitialState | NodeKind::FinalState
            ),
            DiagramKind::UseCase => matches!(kind, NodeKind::Actor | NodeKind::UseCase),
        }
    }

    /// Returns true if edges of the given kind may be connected in this
    /// diagram kind. Note connectors are accepted everywhere.
    pub fn allows_edge(self, kind: EdgeKind) -> bool {
        if matches!(kind, EdgeKind::Note) {
            return true;
        }
        match self {
            DiagramKind::Class => matches!(
                kind,
                EdgeKind::Generalization(_)
                    | EdgeKind::Aggregation(_)
                    | EdgeKind::Association
                    | EdgeKind::Dependency
            ),
            DiagramKind::Object => matches!(
                kind,
                EdgeKind::ObjectReference | EdgeKind::ObjectCollaboration
            ),
            DiagramKind::State => matches!(kind, EdgeKind::StateTransition),
            DiagramKind::UseCase => {
                matches!(kind, EdgeKind::UseCaseAssociation | EdgeKind::Dependency)
            }
        }
    }
}

/// The element graph of one diagram: all of its nodes and edges, plus the
/// containment structure between nodes.
///
/// Nodes are created through [`Diagram::create_node`] and start out as
/// top-level roots; containment is established with
/// [`Diagram::add_child`]. Edges are created fully connected through
/// [`Diagram::connect`].
///
/// # Id validity
///
/// Accessors taking an id ([`Diagram::node`], [`Diagram::edge`]) treat a
/// stale or foreign id as a programming error and panic. Fallible
/// operations that a caller may legitimately attempt with external input
/// (such as [`Diagram::connect`] during persistence reconstruction)
/// return a [`MaquetteError`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    kind: DiagramKind,
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    roots: Vec<NodeId>,
}

impl Diagram {
    /// Creates an empty diagram of the given kind.
    pub fn new(kind: DiagramKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            edges: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Returns the kind of this diagram.
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Returns true if the id refers to a live node of this diagram.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index())
            .is_some_and(|slot| slot.is_some())
    }

    /// Borrows the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or was issued by another diagram; holding
    /// such an id is a programming error.
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id.index())
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("stale or foreign node id {id:?}"))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("stale or foreign node id {id:?}"))
    }

    /// Iterates over all live nodes with their ids, in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (NodeId::new(index), node)))
    }

    /// Returns the top-level nodes (nodes without a parent) in creation
    /// order, adjusted by re-parenting.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    // =========================================================================
    // Edge access
    // =========================================================================

    /// Returns true if the id refers to a live edge of this diagram.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges
            .get(id.index())
            .is_some_and(|slot| slot.is_some())
    }

    /// Borrows the edge with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or was issued by another diagram.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges
            .get(id.index())
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("stale or foreign edge id {id:?}"))
    }

    /// Iterates over all live edges with their ids, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|edge| (EdgeId::new(index), edge)))
    }

    /// Returns the number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|slot| slot.is_some()).count()
    }

    // =========================================================================
    // Node lifecycle
    // =========================================================================

    /// Creates a node of the given kind at the origin, with an empty name
    /// and no children, and registers it as a top-level root.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::NodeKindNotAllowed`] if this diagram kind
    /// does not accept the node kind.
    pub fn create_node(&mut self, kind: NodeKind) -> Result<NodeId, MaquetteError> {
        if !self.kind.allows_node(kind) {
            return Err(MaquetteError::NodeKindNotAllowed {
                kind,
                diagram: self.kind,
            });
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(Node::new(kind)));
        self.roots.push(id);
        Ok(id)
    }

    /// Removes a node and its entire containment subtree, along with every
    /// edge touching a removed node. A stale id is a no-op.
    pub fn remove_node(&mut self, id: NodeId) {
        if !self.contains_node(id) {
            return;
        }
        self.detach(id);
        self.roots.retain(|root| *root != id);

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes[current.index()].take() {
                pending.extend(node.children().iter().copied());
                removed.push(current);
            }
        }
        for slot in self.edges.iter_mut() {
            let touches_removed = slot.as_ref().is_some_and(|edge| {
                removed.contains(&edge.start()) || removed.contains(&edge.end())
            });
            if touches_removed {
                *slot = None;
            }
        }
        debug!(removed_nodes = removed.len(); "Removed containment subtree");
    }

    /// Sets the name text of a node.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.node_mut(id).set_name(name.into());
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Attaches `child` under `parent`, appending it to the end of the
    /// parent's child list.
    ///
    /// If the child currently has another parent it is detached from that
    /// parent first; if it is already under `parent` it moves to the end
    /// of the list without being duplicated. Both sides of the
    /// relationship are updated in this one call, so no intermediate state
    /// is ever observable.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::UnknownNode`] if either id is stale, and
    /// [`MaquetteError::ContainmentCycle`] if `parent` is `child` itself
    /// or one of its descendants.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), MaquetteError> {
        if !self.contains_node(parent) {
            return Err(MaquetteError::UnknownNode(parent));
        }
        if !self.contains_node(child) {
            return Err(MaquetteError::UnknownNode(child));
        }
        if parent == child || self.is_descendant(parent, child) {
            return Err(MaquetteError::ContainmentCycle { parent, child });
        }

        self.detach(child);
        self.roots.retain(|root| *root != child);
        self.node_mut(parent).children_mut().push(child);
        self.node_mut(child).set_parent(Some(parent));
        Ok(())
    }

    /// Detaches `child` from `parent`, making it a top-level root again.
    ///
    /// If the child is not currently contained in that parent (never
    /// added, already moved elsewhere, or a stale id), this is a no-op;
    /// neither node's state changes.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains_node(parent) || !self.contains_node(child) {
            return;
        }
        if self.node(child).parent() != Some(parent) {
            return;
        }
        self.node_mut(parent).children_mut().retain(|c| *c != child);
        self.node_mut(child).set_parent(None);
        self.roots.push(child);
    }

    /// Returns true if `node` appears in the containment subtree rooted at
    /// `ancestor` (not counting `ancestor` itself).
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.node(node).parent();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.node(parent).parent();
        }
        false
    }

    /// Removes `child` from its current parent's child list, without
    /// touching the child's own parent field or the root list.
    fn detach(&mut self, child: NodeId) {
        if let Some(previous) = self.node(child).parent() {
            self.node_mut(previous)
                .children_mut()
                .retain(|c| *c != child);
        }
    }

    // =========================================================================
    // Geometry mutation
    // =========================================================================

    /// Moves a node and every node in its containment subtree by the same
    /// offset, preserving all relative positions.
    pub fn translate(&mut self, id: NodeId, dx: i32, dy: i32) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let node = self.node_mut(current);
            let position = node.position().translated(dx, dy);
            node.set_position(position);
            pending.extend(node.children().iter().copied());
        }
    }

    /// Places a node at an absolute position, moving its subtree rigidly.
    pub fn move_to(&mut self, id: NodeId, position: Point) {
        let current = self.node(id).position();
        self.translate(
            id,
            position.x() - current.x(),
            position.y() - current.y(),
        );
    }

    // =========================================================================
    // Cloning
    // =========================================================================

    /// Deep-copies the containment subtree rooted at `id` and returns the
    /// id of the new root, registered as a top-level node.
    ///
    /// Children are cloned recursively; scalar fields (kind, position,
    /// name) are copied by value. No node of the copy aliases a node of
    /// the source subtree.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let root = self.clone_rec(id, None);
        self.roots.push(root);
        root
    }

    fn clone_rec(&mut self, source: NodeId, parent: Option<NodeId>) -> NodeId {
        let template = self.node(source).clone();
        let id = NodeId::new(self.nodes.len());

        let mut copy = Node::new(template.kind());
        copy.set_position(template.position());
        copy.set_name(template.name().to_owned());
        copy.set_parent(parent);
        self.nodes.push(Some(copy));

        for child in template.children() {
            let cloned_child = self.clone_rec(*child, Some(id));
            self.node_mut(id).children_mut().push(cloned_child);
        }
        id
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Connects a new edge of the given kind between two nodes of this
    /// diagram. Self-edges (`start == end`) are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::EdgeKindNotAllowed`] if this diagram kind
    /// does not accept the edge kind, and [`MaquetteError::UnknownNode`]
    /// if either endpoint is not a live node of this diagram. Invalid
    /// endpoints are rejected here, never discovered later during layout.
    pub fn connect(
        &mut self,
        kind: EdgeKind,
        start: NodeId,
        end: NodeId,
    ) -> Result<EdgeId, MaquetteError> {
        if !self.kind.allows_edge(kind) {
            return Err(MaquetteError::EdgeKindNotAllowed {
                kind,
                diagram: self.kind,
            });
        }
        if !self.contains_node(start) {
            return Err(MaquetteError::UnknownNode(start));
        }
        if !self.contains_node(end) {
            return Err(MaquetteError::UnknownNode(end));
        }
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(Edge::new(kind, start, end)));
        Ok(id)
    }

    /// Sets the label text displayed along an edge.
    pub fn set_edge_label(&mut self, id: EdgeId, label: impl Into<String>) {
        self.edges
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("stale or foreign edge id {id:?}"))
            .set_label(label.into());
    }

    /// Removes an edge. A stale id is a no-op.
    pub fn remove_edge(&mut self, id: EdgeId) {
        if let Some(slot) = self.edges.get_mut(id.index()) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_diagram() -> (Diagram, NodeId, NodeId, NodeId, NodeId) {
        let mut diagram = Diagram::new(DiagramKind::Object);
        let object1 = diagram.create_node(NodeKind::Object).unwrap();
        let object2 = diagram.create_node(NodeKind::Object).unwrap();
        let field1 = diagram.create_node(NodeKind::Field).unwrap();
        let field2 = diagram.create_node(NodeKind::Field).unwrap();
        (diagram, object1, object2, field1, field2)
    }

    #[test]
    fn test_create_node_defaults() {
        let (diagram, object1, ..) = object_diagram();
        let node = diagram.node(object1);
        assert_eq!(node.kind(), NodeKind::Object);
        assert_eq!(node.position(), Point::new(0, 0));
        assert_eq!(node.name(), "");
        assert_eq!(node.children().len(), 0);
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn test_create_node_rejects_foreign_kind() {
        let mut diagram = Diagram::new(DiagramKind::Object);
        let result = diagram.create_node(NodeKind::Actor);
        assert_eq!(
            result,
            Err(MaquetteError::NodeKindNotAllowed {
                kind: NodeKind::Actor,
                diagram: DiagramKind::Object,
            })
        );
    }

    #[test]
    fn test_notes_allowed_in_every_diagram_kind() {
        for kind in [
            DiagramKind::Class,
            DiagramKind::Object,
            DiagramKind::State,
            DiagramKind::UseCase,
        ] {
            assert!(kind.allows_node(NodeKind::Note));
            assert!(kind.allows_node(NodeKind::Point));
            assert!(kind.allows_edge(EdgeKind::Note));
        }
    }

    #[test]
    fn test_add_child() {
        let (mut diagram, object1, object2, field1, field2) = object_diagram();

        diagram.add_child(object1, field1).unwrap();
        assert_eq!(diagram.node(object1).children(), &[field1]);
        assert_eq!(diagram.node(field1).parent(), Some(object1));

        diagram.add_child(object1, field2).unwrap();
        assert_eq!(diagram.node(object1).children(), &[field1, field2]);
        assert_eq!(diagram.node(field1).parent(), Some(object1));
        assert_eq!(diagram.node(field2).parent(), Some(object1));

        // Move a field from one object to another
        diagram.add_child(object2, field1).unwrap();
        assert_eq!(diagram.node(object1).children(), &[field2]);
        assert_eq!(diagram.node(field2).parent(), Some(object1));
        assert_eq!(diagram.node(object2).children(), &[field1]);
        assert_eq!(diagram.node(field1).parent(), Some(object2));
    }

    #[test]
    fn test_add_child_same_parent_does_not_duplicate() {
        let (mut diagram, object1, _, field1, field2) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.add_child(object1, field2).unwrap();

        // Re-adding moves to the end but does not duplicate
        diagram.add_child(object1, field1).unwrap();
        assert_eq!(diagram.node(object1).children(), &[field2, field1]);
        assert_eq!(diagram.node(field1).parent(), Some(object1));
    }

    #[test]
    fn test_add_child_removes_from_roots() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        assert!(diagram.roots().contains(&field1));
        diagram.add_child(object1, field1).unwrap();
        assert!(!diagram.roots().contains(&field1));
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let outer = diagram.create_node(NodeKind::Package).unwrap();
        let inner = diagram.create_node(NodeKind::Package).unwrap();
        diagram.add_child(outer, inner).unwrap();

        assert_eq!(
            diagram.add_child(inner, outer),
            Err(MaquetteError::ContainmentCycle {
                parent: inner,
                child: outer,
            })
        );
        assert_eq!(
            diagram.add_child(outer, outer),
            Err(MaquetteError::ContainmentCycle {
                parent: outer,
                child: outer,
            })
        );
        // The rejected operations changed nothing
        assert_eq!(diagram.node(outer).children(), &[inner]);
        assert_eq!(diagram.node(inner).parent(), Some(outer));
    }

    #[test]
    fn test_remove_child() {
        let (mut diagram, object1, object2, field1, field2) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.add_child(object1, field2).unwrap();

        diagram.remove_child(object1, field1);
        assert_eq!(diagram.node(object1).children(), &[field2]);
        assert_eq!(diagram.node(field1).parent(), None);

        // Removing a node that was never a child is a no-op
        let field3 = diagram.create_node(NodeKind::Field).unwrap();
        diagram.remove_child(object1, field3);
        assert_eq!(diagram.node(object1).children(), &[field2]);

        // A child of another parent is also left alone
        diagram.add_child(object2, field3).unwrap();
        diagram.remove_child(object1, field3);
        assert_eq!(diagram.node(object1).children(), &[field2]);
        assert_eq!(diagram.node(field3).parent(), Some(object2));
    }

    #[test]
    fn test_remove_child_restores_root_status() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        assert!(!diagram.roots().contains(&field1));
        diagram.remove_child(object1, field1);
        assert!(diagram.roots().contains(&field1));
    }

    #[test]
    fn test_translate_no_children() {
        let (mut diagram, object1, ..) = object_diagram();
        assert_eq!(diagram.node(object1).position(), Point::new(0, 0));
        diagram.translate(object1, 100, 200);
        assert_eq!(diagram.node(object1).position(), Point::new(100, 200));
    }

    #[test]
    fn test_translate_with_children() {
        let (mut diagram, object1, _, field1, field2) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.add_child(object1, field2).unwrap();

        diagram.translate(object1, 100, 200);
        assert_eq!(diagram.node(object1).position(), Point::new(100, 200));
        assert_eq!(diagram.node(field1).position(), Point::new(100, 200));
        assert_eq!(diagram.node(field2).position(), Point::new(100, 200));
    }

    #[test]
    fn test_translate_preserves_relative_offsets() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.translate(field1, 10, 25);

        diagram.translate(object1, 5, 5);
        assert_eq!(diagram.node(object1).position(), Point::new(5, 5));
        assert_eq!(diagram.node(field1).position(), Point::new(15, 30));
    }

    #[test]
    fn test_translate_sibling_untouched() {
        let (mut diagram, object1, object2, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.translate(object1, 30, 40);
        assert_eq!(diagram.node(object2).position(), Point::new(0, 0));
    }

    #[test]
    fn test_move_to() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        diagram.translate(field1, 10, 10);

        diagram.move_to(object1, Point::new(50, 60));
        assert_eq!(diagram.node(object1).position(), Point::new(50, 60));
        assert_eq!(diagram.node(field1).position(), Point::new(60, 70));
    }

    #[test]
    fn test_clone_subtree_leaf() {
        let (mut diagram, object1, ..) = object_diagram();
        diagram.set_name(object1, "o1");
        diagram.translate(object1, 10, 20);

        let copy = diagram.clone_subtree(object1);
        assert_ne!(copy, object1);
        assert_eq!(diagram.node(copy).name(), "o1");
        assert_eq!(diagram.node(copy).position(), Point::new(10, 20));
        assert_eq!(diagram.node(copy).children().len(), 0);
        assert_eq!(diagram.node(copy).parent(), None);
    }

    #[test]
    fn test_clone_subtree_with_children() {
        let (mut diagram, object1, _, field1, field2) = object_diagram();
        diagram.set_name(field1, "f1");
        diagram.set_name(field2, "f2");
        diagram.add_child(object1, field1).unwrap();
        diagram.add_child(object1, field2).unwrap();

        let copy = diagram.clone_subtree(object1);
        let copied_children = diagram.node(copy).children().to_vec();
        assert_eq!(copied_children.len(), 2);

        let copied_field1 = copied_children[0];
        let copied_field2 = copied_children[1];
        assert_eq!(diagram.node(copied_field1).name(), "f1");
        assert_eq!(diagram.node(copied_field2).name(), "f2");
        assert_ne!(copied_field1, field1);
        assert_ne!(copied_field2, field2);
        assert_eq!(diagram.node(copied_field1).parent(), Some(copy));
        assert_eq!(diagram.node(copied_field2).parent(), Some(copy));

        // The source subtree is untouched
        assert_eq!(diagram.node(object1).children(), &[field1, field2]);
    }

    #[test]
    fn test_clone_subtree_is_independent() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        let copy = diagram.clone_subtree(object1);

        // Mutating the copy leaves the original alone
        diagram.translate(copy, 100, 100);
        assert_eq!(diagram.node(object1).position(), Point::new(0, 0));
        assert_eq!(diagram.node(field1).position(), Point::new(0, 0));
    }

    #[test]
    fn test_connect() {
        let (mut diagram, object1, object2, ..) = object_diagram();
        let edge = diagram
            .connect(EdgeKind::ObjectCollaboration, object1, object2)
            .unwrap();
        assert_eq!(diagram.edge(edge).start(), object1);
        assert_eq!(diagram.edge(edge).end(), object2);
        assert_eq!(diagram.edge_count(), 1);
    }

    #[test]
    fn test_connect_self_edge() {
        let (mut diagram, object1, ..) = object_diagram();
        let edge = diagram
            .connect(EdgeKind::ObjectCollaboration, object1, object1)
            .unwrap();
        assert!(diagram.edge(edge).is_self_edge());
    }

    #[test]
    fn test_connect_rejects_foreign_kind() {
        let (mut diagram, object1, object2, ..) = object_diagram();
        let result = diagram.connect(EdgeKind::StateTransition, object1, object2);
        assert_eq!(
            result,
            Err(MaquetteError::EdgeKindNotAllowed {
                kind: EdgeKind::StateTransition,
                diagram: DiagramKind::Object,
            })
        );
        assert_eq!(diagram.edge_count(), 0);
    }

    #[test]
    fn test_connect_rejects_removed_endpoint() {
        let (mut diagram, object1, object2, ..) = object_diagram();
        diagram.remove_node(object2);
        let result = diagram.connect(EdgeKind::ObjectCollaboration, object1, object2);
        assert_eq!(result, Err(MaquetteError::UnknownNode(object2)));
    }

    #[test]
    fn test_remove_node_drops_touching_edges() {
        let (mut diagram, object1, object2, field1, _) = object_diagram();
        diagram.add_child(object1, field1).unwrap();
        let kept = diagram
            .connect(EdgeKind::ObjectCollaboration, object2, object2)
            .unwrap();
        let dropped = diagram
            .connect(EdgeKind::ObjectReference, field1, object2)
            .unwrap();

        diagram.remove_node(object1);
        assert!(!diagram.contains_node(object1));
        assert!(!diagram.contains_node(field1));
        assert!(!diagram.contains_edge(dropped));
        assert!(diagram.contains_edge(kept));
    }

    #[test]
    fn test_edge_label() {
        let mut diagram = Diagram::new(DiagramKind::State);
        let idle = diagram.create_node(NodeKind::State).unwrap();
        let busy = diagram.create_node(NodeKind::State).unwrap();
        let transition = diagram
            .connect(EdgeKind::StateTransition, idle, busy)
            .unwrap();
        diagram.set_edge_label(transition, "start");
        assert_eq!(diagram.edge(transition).label(), "start");
    }

    #[test]
    fn test_serde_round_trip_preserves_structure() {
        let (mut diagram, object1, _, field1, _) = object_diagram();
        diagram.set_name(object1, "o1");
        diagram.add_child(object1, field1).unwrap();
        diagram.translate(object1, 30, 40);

        let json = serde_json::to_string(&diagram).unwrap();
        let restored: Diagram = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.kind(), DiagramKind::Object);
        assert_eq!(restored.node_count(), diagram.node_count());
        assert_eq!(restored.node(object1).name(), "o1");
        assert_eq!(restored.node(object1).children(), &[field1]);
        assert_eq!(restored.node(field1).parent(), Some(object1));
        assert_eq!(restored.node(field1).position(), Point::new(30, 40));
    }
}
