//! Viewer for named state nodes in state diagrams.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a named state node as a rounded rectangle, sized to its
/// default unless the name needs more room.
#[derive(Debug, Default)]
pub struct StateNodeViewer;

impl StateNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 80;
    pub const DEFAULT_HEIGHT: i32 = 60;
}

impl NodeViewer for StateNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension = StringMeasurer::get(Alignment::Center, Decorations::new().padded())
            .dimension(data.name());
        default_sized_by_name(
            data.position(),
            Dimension::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            name_dimension,
        )
    }
}
