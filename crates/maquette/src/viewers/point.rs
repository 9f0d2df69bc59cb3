//! Viewer for dimensionless note anchor points.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::Rectangle;
use crate::viewers::{NodeViewer, ViewerRegistry};

/// Lays out a point node: a zero-sized anchor whose connection points all
/// coincide with its position.
#[derive(Debug, Default)]
pub struct PointNodeViewer;

impl NodeViewer for PointNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let position = diagram.node(node).position();
        Rectangle::new(position.x(), position.y(), 0, 0)
    }
}
