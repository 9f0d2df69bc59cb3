//! Viewer for initial and final state nodes.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Direction, Point, Rectangle};
use crate::viewers::{NodeViewer, ViewerRegistry, circle_connection_point};

/// Lays out the circular pseudo-states: the filled initial-state circle
/// and the ringed final-state circle. Both report a fixed diameter
/// regardless of name or children; bounds are always square.
#[derive(Debug, Default)]
pub struct CircularStateNodeViewer;

impl CircularStateNodeViewer {
    pub const DIAMETER: i32 = 20;
}

impl NodeViewer for CircularStateNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let position = diagram.node(node).position();
        Rectangle::new(position.x(), position.y(), Self::DIAMETER, Self::DIAMETER)
    }

    fn connection_point(
        &self,
        diagram: &Diagram,
        registry: &ViewerRegistry,
        node: NodeId,
        direction: Direction,
    ) -> Point {
        circle_connection_point(self.bounds(diagram, registry, node), direction)
    }
}
