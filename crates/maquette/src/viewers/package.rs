//! Viewer for package nodes in class diagrams.

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Rectangle};
use crate::text::{Alignment, Decorations, StringMeasurer};
use crate::viewers::{NodeViewer, ViewerRegistry, default_sized_by_name};

/// Lays out a package node: a tabbed rectangle that grows to enclose the
/// type nodes it contains.
#[derive(Debug, Default)]
pub struct PackageNodeViewer;

impl PackageNodeViewer {
    pub const DEFAULT_WIDTH: i32 = 100;
    pub const DEFAULT_HEIGHT: i32 = 80;
}

impl NodeViewer for PackageNodeViewer {
    fn bounds(&self, diagram: &Diagram, registry: &ViewerRegistry, node: NodeId) -> Rectangle {
        let data = diagram.node(node);
        let name_dimension =
            StringMeasurer::get(Alignment::TopLeft, Decorations::new().bold().padded())
                .dimension(data.name());
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
