//! Viewer for annotation note nodes.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a note node: the dog-eared annotation rectangle, sized to its
/// default unless the note text needs more room.
#[derive(Debug, Default)]
pub struct NoteNodeViewer;

impl NoteNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 60;
    pub const DEFAULT_HEIGHT: i32 = 40;
}

impl NodeViewer for NoteNodeViewer {
    fn bounds(&self, diagram: &Diagram, _registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let text_dimension = StringMeasurer::get(Alignment::TopLeft, Decorations::new().padded())
            .dimension(data.name());
        default_sized_by_name(
            data.position(),
            Dimension::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            text_dimension,
        )
    }
}
