//! Per-node-kind layout strategies.
//!
//! Every [`NodeKind`](crate::diagram::NodeKind) has a viewer implementing
//! [`NodeViewer`]: a stateless strategy that computes the node's bounding
//! rectangle and boundary connection points from the node's current
//! attributes. Keeping this logic outside the node types themselves means
//! the structural model stays free of geometry, and a new diagram element
//! kind only needs a new strategy registered in the
//! [`ViewerRegistry`](registry::ViewerRegistry).
//!
//! Viewers never cache: every query recomputes from the node's current
//! position, name, and children, so results always reflect the latest
//! mutation state.

mod actor;
mod circular_state;
mod field;
mod note;
mod object;
mod package;
mod point;
mod registry;
mod state;
mod type_node;
mod use_case;

pub use actor::ActorNodeViewer;
pub use circular_state::CircularStateNodeViewer;
pub use field::FieldNodeViewer;
pub use note::NoteNodeViewer;
pub use object::ObjectNodeViewer;
pub use package::PackageNodeViewer;
pub use point::PointNodeViewer;
pub use registry::ViewerRegistry;
pub use state::StateNodeViewer;
pub use type_node::TypeNodeViewer;
pub use use_case::UseCaseNodeViewer;

use std::fmt;

use crate::diagram::{Diagram, NodeId};
use crate::geometry::{Dimension, Direction, Point, Rectangle};

/// A layout strategy for one kind of node.
///
/// Implementations are stateless; all inputs come from the diagram. The
/// registry is passed through so container viewers can lay out their
/// children through whatever strategies those children resolve to.
pub trait NodeViewer: fmt::Debug {
    /// Computes the node's absolute bounding rectangle.
    fn bounds(&self, diagram: &Diagram, registry: &ViewerRegistry, node: NodeId) -> Rectangle;

    /// Computes the boundary point where an edge attaches in the given
    /// compass direction. The default projects onto the bounding
    /// rectangle; circular viewers override this to project onto their
    /// circle.
    fn connection_point(
        &self,
        diagram: &Diagram,
        registry: &ViewerRegistry,
        node: NodeId,
        direction: Direction,
    ) -> Point {
        rectangle_connection_point(self.bounds(diagram, registry, node), direction)
    }
}

/// Returns the point on a rectangle's boundary in the given compass
/// direction: side midpoints for cardinal directions, corners for
/// diagonals.
pub fn rectangle_connection_point(bounds: Rectangle, direction: Direction) -> Point {
    match direction {
        Direction::North => Point::new(bounds.x() + bounds.width() / 2, bounds.y()),
        Direction::NorthEast => bounds.top_right(),
        Direction::East => Point::new(bounds.max_x(), bounds.y() + bounds.height() / 2),
        Direction::SouthEast => bounds.bottom_right(),
        Direction::South => Point::new(bounds.x() + bounds.width() / 2, bounds.max_y()),
        Direction::SouthWest => bounds.bottom_left(),
        Direction::West => Point::new(bounds.x(), bounds.y() + bounds.height() / 2),
        Direction::NorthWest => bounds.top_left(),
    }
}

/// Returns the point on the boundary of the circle inscribed in the given
/// square bounds, in the given compass direction.
pub fn circle_connection_point(bounds: Rectangle, direction: Direction) -> Point {
    use std::f32::consts::FRAC_1_SQRT_2;

    let center = bounds.center();
    let radius = bounds.width() as f32 / 2.0;
    let (ux, uy): (f32, f32) = match direction {
        Direction::North => (0.0, -1.0),
        Direction::NorthEast => (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        Direction::East => (1.0, 0.0),
        Direction::SouthEast => (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        Direction::South => (0.0, 1.0),
        Direction::SouthWest => (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        Direction::West => (-1.0, 0.0),
        Direction::NorthWest => (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    };
    Point::new(
        (center.x() as f32 + ux * radius).round() as i32,
        (center.y() as f32 + uy * radius).round() as i32,
    )
}

/// Builds a node's base rectangle: the kind's default dimension at the
/// node's position, grown to fit the measured name dimension.
pub(crate) fn default_sized_by_name(
    position: Point,
    default: Dimension,
    name_dimension: Dimension,
) -> Rectangle {
    let dimension = default.max(name_dimension);
    Rectangle::new(
        position.x(),
        position.y(),
        dimension.width(),
        dimension.height(),
    )
}
