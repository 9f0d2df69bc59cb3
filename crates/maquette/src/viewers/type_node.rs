//! Viewer for class and interface nodes in class diagrams.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a type node (class or interface): the classic compartmented
/// rectangle, sized to its default unless the bold name needs more room.
#[derive(Debug, Default)]
pub struct TypeNodeViewer;

impl TypeNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 100;
    pub const DEFAULT_HEIGHT: i32 = 60;
}

impl NodeViewer for TypeNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension =
            StringMeasurer::get(Alignment::Center, Decorations::new().bold().padded())
                .dimension(data.name());
        default_sized_by_name(
            data.position(),
            Dimension::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            name_dimension,
        )
    }
}
