//! Viewer for use case oval nodes.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a use case node: an oval sized to its default unless the name
/// needs more room.
#[derive(Debug, Default)]
pub struct UseCaseNodeViewer;

impl UseCaseNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 110;
    pub const DEFAULT_HEIGHT: i32 = 40;
}

impl NodeViewer for UseCaseNodeViewer {
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
