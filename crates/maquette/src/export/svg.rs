//! SVG snapshots of a computed layout.
//!
//! The exporter renders node bounds and routed edge paths into an SVG
//! document. It exists for debugging and golden-layout inspection, not
//! for final presentation: names render as single text runs and styling
//! is fixed.

use log::info;
use svg::Document;
use svg::node::Text as SvgText;
use svg::node::element as svg_element;

use crate::diagram::{Diagram, EdgeKind, GeneralizationKind, NodeId, NodeKind};
use crate::geometry::Rectangle;
use crate::layout::{RoutePlan, RoutedEdge};
use crate::viewers::ViewerRegistry;

/// Margin around the diagram content, in geometry units.
const MARGIN: i32 = 10;

/// Corner radius for rounded state rectangles.
const STATE_CORNER_RADIUS: i32 = 10;

/// Renders diagrams and route plans to SVG documents.
#[derive(Debug)]
pub struct SvgExporter<'a> {
    registry: &'a ViewerRegistry,
}

impl<'a> SvgExporter<'a> {
    /// Creates an exporter resolving node layout through the given registry.
    pub fn new(registry: &'a ViewerRegistry) -> Self {
        Self { registry }
    }

    /// Renders the diagram and its planned edge routes to an SVG document.
    pub fn export(&self, diagram: &Diagram, plan: &RoutePlan) -> Document {
        info!(node_count = diagram.node_count(), edge_count = plan.len(); "Exporting SVG snapshot");

        let content = self.content_bounds(diagram, plan);
        let mut document = Document::new().set(
            "viewBox",
            (
                content.x() - MARGIN,
                content.y() - MARGIN,
                content.width() + 2 * MARGIN,
                content.height() + 2 * MARGIN,
            ),
        );

        // Edges go underneath the node shapes, already in draw order
        for route in plan.routes() {
            document = document.add(self.render_route(diagram, route));
            if let Some(label) = self.render_route_label(diagram, route) {
                document = document.add(label);
            }
        }
        for (id, _) in diagram.nodes() {
            for element in self.render_node(diagram, id) {
                document = document.add(element);
            }
        }
        document
    }

    /// Smallest rectangle containing every node and route point.
    fn content_bounds(&self, diagram: &Diagram, plan: &RoutePlan) -> Rectangle {
        let mut content: Option<Rectangle> = None;
        for (id, _) in diagram.nodes() {
            let bounds = self.registry.bounds(diagram, id);
            content = Some(match content {
                Some(current) => current.merge(bounds),
                None => bounds,
            });
        }
        for route in plan.routes() {
            for point in route.path() {
                content = Some(match content {
                    Some(current) => current.including(*point),
                    None => Rectangle::new(point.x(), point.y(), 0, 0),
                });
            }
        }
        content.unwrap_or_default()
    }

    fn render_route(&self, diagram: &Diagram, route: &RoutedEdge) -> svg_element::Polyline {
        let points = route
            .path()
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");
        let mut polyline = svg_element::Polyline::new()
            .set("points", points)
            .set("fill", "none")
            .set("stroke", "black");
        let dashed = matches!(
            diagram.edge(route.edge()).kind(),
            EdgeKind::Dependency
                | EdgeKind::Note
                | EdgeKind::Generalization(GeneralizationKind::Implementation)
        );
        if dashed {
            polyline = polyline.set("stroke-dasharray", "4 4");
        }
        polyline
    }

    fn render_route_label(
        &self,
        diagram: &Diagram,
        route: &RoutedEdge,
    ) -> Option<svg_element::Text> {
        let label = diagram.edge(route.edge()).label();
        if label.is_empty() {
            return None;
        }
        let path = route.path();
        let anchor = path[(path.len() - 1) / 2].midpoint(path[path.len() / 2]);
        Some(
            svg_element::Text::new("")
                .set("x", anchor.x())
                .set("y", anchor.y() - 4)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", 12)
                .add(SvgText::new(label)),
        )
    }

    fn render_node(&self, diagram: &Diagram, id: NodeId) -> Vec<Box<dyn svg::Node>> {
        let node = diagram.node(id);
        let bounds = self.registry.bounds(diagram, id);
        let mut elements: Vec<Box<dyn svg::Node>> = Vec::new();

        match node.kind() {
            NodeKind::Point => {}
            NodeKind::InitialState => {
                elements.push(Box::new(
                    svg_element::Circle::new()
                        .set("cx", bounds.center().x())
                        .set("cy", bounds.center().y())
                        .set("r", bounds.width() / 2)
                        .set("fill", "black"),
                ));
            }
            NodeKind::FinalState => {
                let center = bounds.center();
                elements.push(Box::new(
                    svg_element::Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", bounds.width() / 2)
                        .set("fill", "white")
                        .set("stroke", "black"),
                ));
                elements.push(Box::new(
                    svg_element::Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", bounds.width() / 4)
                        .set("fill", "black"),
                ));
            }
            NodeKind::UseCase => {
                let center = bounds.center();
                elements.push(Box::new(
                    svg_element::Ellipse::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("rx", bounds.width() / 2)
                        .set("ry", bounds.height() / 2)
                        .set("fill", "white")
                        .set("stroke", "black"),
                ));
            }
            kind => {
                let mut rectangle = svg_element::Rectangle::new()
                    .set("x", bounds.x())
                    .set("y", bounds.y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", "white")
                    .set("stroke", "black");
                if kind == NodeKind::State {
                    rectangle = rectangle
                        .set("rx", STATE_CORNER_RADIUS)
                        .set("ry", STATE_CORNER_RADIUS);
                }
                elements.push(Box::new(rectangle));
            }
        }

        if !node.name().is_empty() && !matches!(node.kind(), NodeKind::Point) {
            let center = bounds.center();
            elements.push(Box::new(
                svg_element::Text::new("")
                    .set("x", center.x())
                    .set("y", center.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", "sans-serif")
                    .set("font-size", 12)
                    .add(SvgText::new(node.name())),
            ));
        }
        elements
    }
}
