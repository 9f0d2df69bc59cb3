//! Viewer lookup by node kind.

use indexmap::IndexMap;
use log::debug;

use crate::diagram::{Diagram, NodeId, NodeKind};
use crate::geometry::{Direction, Point, Rectangle};
use crate::viewers::{
    ActorNodeViewer, CircularStateNodeViewer, FieldNodeViewer, NodeViewer, NoteNodeViewer,
    ObjectNodeViewer, PackageNodeViewer, PointNodeViewer, StateNodeViewer, TypeNodeViewer,
    UseCaseNodeViewer,
};

/// Maps each [`NodeKind`] to the [`NodeViewer`] strategy that lays it out.
///
/// The default registry covers every built-in kind. A new element kind is
/// supported by registering a strategy for it, without touching existing
/// dispatch code.
///
/// # Panics
///
/// Resolving a kind with no registered viewer panics: an unmapped kind is
/// a programming error (a missing registration), not a runtime condition,
/// so it fails fast rather than silently defaulting.
#[derive(Debug)]
pub struct ViewerRegistry {
    viewers: IndexMap<NodeKind, Box<dyn NodeViewer>>,
}

impl ViewerRegistry {
    /// Creates a registry with no viewers registered.
    pub fn empty() -> Self {
        Self {
            viewers: IndexMap::new(),
        }
    }

    /// Registers (or replaces) the viewer for a node kind.
    pub fn register(&mut self, kind: NodeKind, viewer: Box<dyn NodeViewer>) {
        self.viewers.insert(kind, viewer);
    }

    /// Resolves the viewer for a node kind.
    pub fn viewer_for(&self, kind: NodeKind) -> &dyn NodeViewer {
        self.viewers
            .get(&kind)
            .unwrap_or_else(|| panic!("no node viewer registered for {kind:?}"))
            .as_ref()
    }

    /// Computes the bounds of a node through its registered viewer.
    pub fn bounds(&self, diagram: &Diagram, node: NodeId) -> Rectangle {
        self.viewer_for(diagram.node(node).kind())
            .bounds(diagram, self, node)
    }

    /// Computes a connection point of a node through its registered viewer.
    pub fn connection_point(
        &self,
        diagram: &Diagram,
        node: NodeId,
        direction: Direction,
    ) -> Point {
        self.viewer_for(diagram.node(node).kind())
            .connection_point(diagram, self, node, direction)
    }
}

impl Default for ViewerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(NodeKind::Class, Box::new(TypeNodeViewer));
        registry.register(NodeKind::Interface, Box::new(TypeNodeViewer));
        registry.register(NodeKind::Package, Box::new(PackageNodeViewer));
        registry.register(NodeKind::Object, Box::new(ObjectNodeViewer));
        registry.register(NodeKind::Field, Box::new(FieldNodeViewer));
        registry.register(NodeKind::State, Box::new(StateNodeViewer));
        registry.register(NodeKind::InitialState, Box::new(CircularStateNodeViewer));
        registry.register(NodeKind::FinalState, Box::new(CircularStateNodeViewer));
        registry.register(NodeKind::Actor, Box::new(ActorNodeViewer));
        registry.register(NodeKind::UseCase, Box::new(UseCaseNodeViewer));
        registry.register(NodeKind::Note, Box::new(NoteNodeViewer));
        registry.register(NodeKind::Point, Box::new(PointNodeViewer));
        debug!(viewer_count = registry.viewers.len(); "Built default viewer registry");
        registry
    }
}
