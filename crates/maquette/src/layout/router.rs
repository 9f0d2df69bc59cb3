//! Deterministic edge route planning.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::RouterConfig;
use crate::diagram::{Diagram, EdgeId, NodeId};
use crate::geometry::{Direction, Point, Rectangle};
use crate::layout::EdgePriority;
use crate::viewers::{ViewerRegistry, rectangle_connection_point};

/// The planned path for one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedEdge {
    edge: EdgeId,
    priority: EdgePriority,
    path: Vec<Point>,
}

impl RoutedEdge {
    /// Returns the edge this route belongs to
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// Returns the edge's priority class
    pub fn priority(&self) -> EdgePriority {
        self.priority
    }

    /// Returns the polyline path, from start endpoint to end endpoint
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Returns true if this route is an orthogonal multi-segment path
    pub fn is_segmented(&self) -> bool {
        self.priority.is_segmented()
    }
}

/// The planned routes of a diagram's edges, in draw order.
#[derive(Debug, Clone, Default)]
pub struct RoutePlan {
    routes: Vec<RoutedEdge>,
}

impl RoutePlan {
    /// Returns the routes in draw order (highest priority first).
    pub fn routes(&self) -> &[RoutedEdge] {
        &self.routes
    }

    /// Returns the route planned for the given edge, if any.
    pub fn route(&self, edge: EdgeId) -> Option<&RoutedEdge> {
        self.routes.iter().find(|routed| routed.edge == edge)
    }

    /// Returns the number of planned routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes were planned.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Plans deterministic edge paths from a diagram's current geometry.
///
/// Given the same diagram, registry, and configuration, planning always
/// produces the same routes: edges are processed in (priority, id) order
/// and every geometric decision is a pure function of node bounds.
#[derive(Debug)]
pub struct Router<'a> {
    registry: &'a ViewerRegistry,
    config: RouterConfig,
}

impl<'a> Router<'a> {
    /// Creates a router with the default configuration.
    pub fn new(registry: &'a ViewerRegistry) -> Self {
        Self::with_config(registry, RouterConfig::default())
    }

    /// Creates a router with the given configuration.
    pub fn with_config(registry: &'a ViewerRegistry, config: RouterConfig) -> Self {
        Self { registry, config }
    }

    /// Plans routes for every edge of the diagram, in draw order.
    pub fn plan(&self, diagram: &Diagram) -> RoutePlan {
        let mut ordered: Vec<(EdgeId, EdgePriority)> = diagram
            .edges()
            .map(|(id, edge)| (id, EdgePriority::of(edge)))
            .collect();
        ordered.sort_by_key(|(id, priority)| (*priority, *id));
        info!(edge_count = ordered.len(); "Planning edge routes");

        // Straight edges sharing an endpoint pair fan out side by side.
        // Grouping iterates edges in id order, so offsets are stable.
        let mut parallel_groups: HashMap<(NodeId, NodeId), Vec<EdgeId>> = HashMap::new();
        for (id, edge) in diagram.edges() {
            let priority = EdgePriority::of(edge);
            if !priority.is_segmented() && priority != EdgePriority::SelfEdge {
                parallel_groups
                    .entry(edge.endpoint_pair())
                    .or_default()
                    .push(id);
            }
        }

        let routes = ordered
            .into_iter()
            .map(|(id, priority)| {
                let edge = diagram.edge(id);
                let start_bounds = self.registry.bounds(diagram, edge.start());
                let end_bounds = self.registry.bounds(diagram, edge.end());

                let path = if priority == EdgePriority::SelfEdge {
                    self.self_loop_path(start_bounds)
                } else if priority.is_segmented() {
                    segmented_path(start_bounds, end_bounds)
                } else {
                    let group = &parallel_groups[&edge.endpoint_pair()];
                    let index = group
                        .iter()
                        .position(|member| *member == id)
                        .expect("edge missing from its own parallel group")
                        as i32;
                    let spacing = self.config.parallel_spacing();
                    let offset = index * spacing - (group.len() as i32 - 1) * spacing / 2;
                    straight_path(start_bounds, end_bounds, offset)
                };
                debug!(edge:? = id, priority:? = priority; "Planned route");
                RoutedEdge {
                    edge: id,
                    priority,
                    path,
                }
            })
            .collect();

        RoutePlan { routes }
    }

    /// Builds the orthogonal loop for a self-edge, hugging the node's
    /// top-right corner: out through the top edge, around the corner, and
    /// back in through the right edge.
    fn self_loop_path(&self, bounds: Rectangle) -> Vec<Point> {
        let size = self.config.self_loop_size();
        vec![
            Point::new(bounds.max_x() - size, bounds.y()),
            Point::new(bounds.max_x() - size, bounds.y() - size),
            Point::new(bounds.max_x() + size, bounds.y() - size),
            Point::new(bounds.max_x() + size, bounds.y() + size / 2),
            Point::new(bounds.max_x(), bounds.y() + size / 2),
        ]
    }
}

/// Routes a segmented edge as an orthogonal path between the facing sides
/// of its endpoints, jogging at the midline when the endpoints are not
/// aligned.
fn segmented_path(start_bounds: Rectangle, end_bounds: Rectangle) -> Vec<Point> {
    let start_center = start_bounds.center();
    let end_center = end_bounds.center();
    let dx = end_center.x() - start_center.x();
    let dy = end_center.y() - start_center.y();

    if dx.abs() >= dy.abs() {
        let (from, to) = if dx >= 0 {
            (Direction::East, Direction::West)
        } else {
            (Direction::West, Direction::East)
        };
        let p0 = rectangle_connection_point(start_bounds, from);
        let p1 = rectangle_connection_point(end_bounds, to);
        if p0.y() == p1.y() {
            vec![p0, p1]
        } else {
            let mid_x = (p0.x() + p1.x()) / 2;
            vec![
                p0,
                Point::new(mid_x, p0.y()),
                Point::new(mid_x, p1.y()),
                p1,
            ]
        }
    } else {
        let (from, to) = if dy >= 0 {
            (Direction::South, Direction::North)
        } else {
            (Direction::North, Direction::South)
        };
        let p0 = rectangle_connection_point(start_bounds, from);
        let p1 = rectangle_connection_point(end_bounds, to);
        if p0.x() == p1.x() {
            vec![p0, p1]
        } else {
            let mid_y = (p0.y() + p1.y()) / 2;
            vec![
                p0,
                Point::new(p0.x(), mid_y),
                Point::new(p1.x(), mid_y),
                p1,
            ]
        }
    }
}

/// Routes a straight edge boundary-to-boundary, optionally shifted
/// perpendicular to its dominant axis to fan out parallel edges.
fn straight_path(start_bounds: Rectangle, end_bounds: Rectangle, offset: i32) -> Vec<Point> {
    let start_center = start_bounds.center();
    let end_center = end_bounds.center();
    let dx = end_center.x() - start_center.x();
    let dy = end_center.y() - start_center.y();
    let (offset_x, offset_y) = if dx.abs() >= dy.abs() {
        (0, offset)
    } else {
        (offset, 0)
    };

    let a = start_center.translated(offset_x, offset_y);
    let b = end_center.translated(offset_x, offset_y);
    vec![
        boundary_intersection(start_bounds, a, b),
        boundary_intersection(end_bounds, b, a),
    ]
}

/// Finds where the ray from `a` towards `b` crosses the rectangle
/// boundary. `a` is expected to lie inside the rectangle; degenerate
/// rectangles and coincident points fall back to `a` so point-like nodes
/// anchor edges at their position.
fn boundary_intersection(bounds: Rectangle, a: Point, b: Point) -> Point {
    if bounds.width() == 0 || bounds.height() == 0 {
        return a;
    }

    let (ax, ay) = (a.x() as f32, a.y() as f32);
    let (bx, by) = (b.x() as f32, b.y() as f32);
    let length = (bx - ax).hypot(by - ay);
    if length < 0.001 {
        return a;
    }
    let dir_x = (bx - ax) / length;
    let dir_y = (by - ay) / length;

    let left = bounds.x() as f32;
    let right = bounds.max_x() as f32;
    let top = bounds.y() as f32;
    let bottom = bounds.max_y() as f32;

    // Smallest positive distance along the ray that lands on an edge
    let mut t_best = f32::MAX;
    for edge_y in [top, bottom] {
        let t = (edge_y - ay) / dir_y;
        if t.is_finite() && t > 0.0 && t < t_best {
            let x = dir_x.mul_add(t, ax);
            if x >= left && x <= right {
                t_best = t;
            }
        }
    }
    for edge_x in [left, right] {
        let t = (edge_x - ax) / dir_x;
        if t.is_finite() && t > 0.0 && t < t_best {
            let y = dir_y.mul_add(t, ay);
            if y >= top && y <= bottom {
                t_best = t;
            }
        }
    }

    if t_best == f32::MAX || !t_best.is_finite() {
        return b;
    }
    Point::new(
        dir_x.mul_add(t_best, ax).round() as i32,
        dir_y.mul_add(t_best, ay).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{DiagramKind, EdgeKind, GeneralizationKind, NodeKind};

    fn side_by_side_classes() -> (Diagram, NodeId, NodeId) {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let left = diagram.create_node(NodeKind::Class).unwrap();
        let right = diagram.create_node(NodeKind::Class).unwrap();
        diagram.translate(right, 200, 0);
        (diagram, left, right)
    }

    #[test]
    fn test_boundary_intersection_cardinals() {
        let bounds = Rectangle::new(80, 80, 40, 40);
        let center = bounds.center();
        assert_eq!(
            boundary_intersection(bounds, center, Point::new(200, 100)),
            Point::new(120, 100)
        );
        assert_eq!(
            boundary_intersection(bounds, center, Point::new(0, 100)),
            Point::new(80, 100)
        );
        assert_eq!(
            boundary_intersection(bounds, center, Point::new(100, 200)),
            Point::new(100, 120)
        );
        assert_eq!(
            boundary_intersection(bounds, center, Point::new(100, 0)),
            Point::new(100, 80)
        );
    }

    #[test]
    fn test_boundary_intersection_diagonal_hits_corner() {
        let bounds = Rectangle::new(80, 80, 40, 40);
        let center = bounds.center();
        assert_eq!(
            boundary_intersection(bounds, center, Point::new(200, 200)),
            Point::new(120, 120)
        );
    }

    #[test]
    fn test_boundary_intersection_degenerate_rectangle() {
        let bounds = Rectangle::new(50, 50, 0, 0);
        let anchor = Point::new(50, 50);
        assert_eq!(
            boundary_intersection(bounds, anchor, Point::new(200, 100)),
            anchor
        );
    }

    #[test]
    fn test_boundary_intersection_coincident_points() {
        let bounds = Rectangle::new(80, 80, 40, 40);
        let center = bounds.center();
        assert_eq!(boundary_intersection(bounds, center, center), center);
    }

    #[test]
    fn test_segmented_route_between_aligned_nodes() {
        let (mut diagram, left, right) = side_by_side_classes();
        let edge = diagram
            .connect(
                EdgeKind::Generalization(GeneralizationKind::Inheritance),
                left,
                right,
            )
            .unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        let route = plan.route(edge).unwrap();
        assert!(route.is_segmented());
        // Aligned type nodes connect east side to west side directly
        assert_eq!(route.path(), &[Point::new(100, 30), Point::new(200, 30)]);
    }

    #[test]
    fn test_segmented_route_jogs_at_midline() {
        let (mut diagram, left, right) = side_by_side_classes();
        diagram.translate(right, 0, 80);
        let edge = diagram
            .connect(
                EdgeKind::Generalization(GeneralizationKind::Inheritance),
                left,
                right,
            )
            .unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        let path = plan.route(edge).unwrap().path();
        assert_eq!(
            path,
            &[
                Point::new(100, 30),
                Point::new(150, 30),
                Point::new(150, 110),
                Point::new(200, 110),
            ]
        );
        // Every segment is orthogonal
        for pair in path.windows(2) {
            assert!(pair[0].x() == pair[1].x() || pair[0].y() == pair[1].y());
        }
    }

    #[test]
    fn test_straight_route_for_dependency() {
        let (mut diagram, left, right) = side_by_side_classes();
        let edge = diagram.connect(EdgeKind::Dependency, left, right).unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        let route = plan.route(edge).unwrap();
        assert!(!route.is_segmented());
        assert_eq!(route.path(), &[Point::new(100, 30), Point::new(200, 30)]);
    }

    #[test]
    fn test_parallel_straight_edges_fan_out() {
        let (mut diagram, left, right) = side_by_side_classes();
        let first = diagram.connect(EdgeKind::Dependency, left, right).unwrap();
        let second = diagram.connect(EdgeKind::Dependency, right, left).unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        // Offsets are symmetric around the shared axis (default spacing 12)
        assert_eq!(
            plan.route(first).unwrap().path(),
            &[Point::new(100, 24), Point::new(200, 24)]
        );
        assert_eq!(
            plan.route(second).unwrap().path(),
            &[Point::new(200, 36), Point::new(100, 36)]
        );
    }

    #[test]
    fn test_self_edge_loops_at_top_right_corner() {
        let (mut diagram, left, _) = side_by_side_classes();
        let edge = diagram
            .connect(EdgeKind::Association, left, left)
            .unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        let route = plan.route(edge).unwrap();
        assert_eq!(route.priority(), EdgePriority::SelfEdge);
        // Class bounds are (0, 0, 100, 60); default loop size is 20
        assert_eq!(
            route.path(),
            &[
                Point::new(80, 0),
                Point::new(80, -20),
                Point::new(120, -20),
                Point::new(120, 10),
                Point::new(100, 10),
            ]
        );
    }

    #[test]
    fn test_plan_is_in_draw_order() {
        let (mut diagram, left, right) = side_by_side_classes();
        let dependency = diagram.connect(EdgeKind::Dependency, left, right).unwrap();
        let inheritance = diagram
            .connect(
                EdgeKind::Generalization(GeneralizationKind::Inheritance),
                left,
                right,
            )
            .unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.routes()[0].edge(), inheritance);
        assert_eq!(plan.routes()[1].edge(), dependency);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let (mut diagram, left, right) = side_by_side_classes();
        diagram.connect(EdgeKind::Dependency, left, right).unwrap();
        diagram
            .connect(EdgeKind::Aggregation(crate::diagram::AggregationKind::Composition), left, right)
            .unwrap();
        diagram.connect(EdgeKind::Association, left, left).unwrap();

        let registry = ViewerRegistry::default();
        let router = Router::new(&registry);
        let first = router.plan(&diagram);
        let second = router.plan(&diagram);
        assert_eq!(first.routes(), second.routes());
    }

    #[test]
    fn test_vertical_segmented_route() {
        let mut diagram = Diagram::new(DiagramKind::Class);
        let top = diagram.create_node(NodeKind::Class).unwrap();
        let bottom = diagram.create_node(NodeKind::Class).unwrap();
        diagram.translate(bottom, 0, 200);
        let edge = diagram
            .connect(
                EdgeKind::Generalization(GeneralizationKind::Inheritance),
                bottom,
                top,
            )
            .unwrap();

        let registry = ViewerRegistry::default();
        let plan = Router::new(&registry).plan(&diagram);
        // The subclass connects from its north side up into the superclass
        assert_eq!(
            plan.route(edge).unwrap().path(),
            &[Point::new(50, 200), Point::new(50, 60)]
        );
    }
}
