//! Viewer for object instance nodes in object diagrams.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out an object node: a rectangle holding the underlined object
/// name, sized to its default unless the name or contained field nodes
/// need more room.
///
/// Field children keep their own absolute positions; the object's bounds
/// grow to enclose them rather than repositioning them.
#[derive(Debug, Default)]
pub struct ObjectNodeViewer;

impl ObjectNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 80;
    pub const DEFAULT_HEIGHT: i32 = 60;

    fn name_measurer() -> StringMeasurer {
        StringMeasurer::get(
            Alignment::Center,
            Decorations::new().bold().underlined().padded(),
        )
    }
}

impl NodeViewer for ObjectNodeViewer {
    fn bounds(&self, diagram: &Diagram, registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension = Self::name_measurer().dimension(data.name());
        let mut bounds = default_sized_by_name(
            data.position(),
            Dimension::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            name_dimension,
        );
        for child in data.children() {
            bounds = bounds.merge(registry.bounds(diagram, *child));
        }
        bounds
    }
}
