//! Viewer for field nodes contained in object nodes.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a field node: a single text row inside an object, sized to
/// its name.
#[derive(Debug, Default)]
pub struct FieldNodeViewer;

impl FieldNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 60;
    pub const DEFAULT_HEIGHT: i32 = 20;
}

impl NodeViewer for FieldNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension = StringMeasurer::get(Alignment::CenterLeft, Decorations::new().padded())
            .dimension(data.name());
        default_sized_by_name(
            data.position(),
            Dimension::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            name_dimension,
        )
    }
}
