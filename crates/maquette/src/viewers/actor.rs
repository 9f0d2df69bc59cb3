//! Viewer for actor nodes in use case diagrams.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::Rectangle;
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry};

/// Lays out an actor node: the stick figure with its name beneath.
///
/// The figure itself has a fixed size; the name extends the node
/// downward, and widens it when the text is wider than the figure.
#[derive(Debug, Default)]
pub struct ActorNodeViewer;

impl ActorNodeViewer {
    /// Width of the stick figure.
    pub const WIDTH: i32 = 48;
    /// Height of the stick figure, excluding the name.
    pub const HEIGHT: i32 = 64;

    fn name_measurer() -> StringMeasurer {
        StringMeasurer::get(Alignment::Center, Decorations::new().padded())
    }
}

impl NodeViewer for ActorNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension = Self::name_measurer().dimension(data.name());
        let width = Self::WIDTH.max(name_dimension.width());
        let height = Self::HEIGHT + name_dimension.height();
        Rectangle::new(data.position().x(), data.position().y(), width, height)
    }
}
