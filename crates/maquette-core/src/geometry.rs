//! Integer geometry primitives for diagram layout.
//!
//! All diagram geometry in Maquette uses integer coordinates so that
//! layout results are pixel-exact and value-comparable. The types here
//! are immutable: every operation returns a new value.
//!
//! - [`Point`] - A position in diagram space
//! - [`Dimension`] - A width and height pair
//! - [`Rectangle`] - An axis-aligned rectangle
//! - [`Direction`] - One of the eight compass directions

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A position in diagram space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Returns a new point moved by the given offsets
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Calculates the midpoint between this point and another point
    ///
    /// Coordinates are rounded towards negative infinity, matching
    /// integer division of the coordinate sums.
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x).div_euclid(2),
            y: (self.y + other.y).div_euclid(2),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The dimensions of an element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    width: i32,
    height: i32,
}

impl Dimension {
    /// Creates a new dimension with the specified width and height
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width of this dimension
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height of this dimension
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns a new dimension with the maximum width and height between
    /// this dimension and another
    pub fn max(self, other: Dimension) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new dimension grown by the given amounts
    pub fn expanded(self, dwidth: i32, dheight: i32) -> Self {
        Self {
            width: self.width + dwidth,
            height: self.height + dheight,
        }
    }
}

/// An axis-aligned rectangle with integer position and size.
///
/// The rectangle is anchored at its top-left corner; `x` grows to the
/// east and `y` grows to the south, as in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Creates a new rectangle from its top-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x-coordinate of the left edge
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the top edge
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge
    pub fn max_x(self) -> i32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn max_y(self) -> i32 {
        self.y + self.height
    }

    /// Returns the top-left corner as a point
    pub fn top_left(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the top-right corner as a point
    pub fn top_right(self) -> Point {
        Point::new(self.max_x(), self.y)
    }

    /// Returns the bottom-left corner as a point
    pub fn bottom_left(self) -> Point {
        Point::new(self.x, self.max_y())
    }

    /// Returns the bottom-right corner as a point
    pub fn bottom_right(self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns the center of the rectangle, rounded towards the top-left
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Converts the rectangle's size into a dimension
    pub fn to_dimension(self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Returns a new rectangle moved by the given offsets
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns true if the point lies inside the rectangle or on its boundary
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.x
            && point.x() <= self.max_x()
            && point.y() >= self.y
            && point.y() <= self.max_y()
    }

    /// Returns the smallest rectangle containing this rectangle and the point
    pub fn including(self, point: Point) -> Self {
        let min_x = self.x.min(point.x());
        let min_y = self.y.min(point.y());
        let max_x = self.max_x().max(point.x());
        let max_y = self.max_y().max(point.y());
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Merges two rectangles into the smallest rectangle containing both
    pub fn merge(self, other: Self) -> Self {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

/// One of the eight compass directions, used to key connection-point
/// queries on node boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns true for the four cardinal directions (N, E, S, W)
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// Returns the direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "north_east" => Ok(Direction::NorthEast),
            "east" => Ok(Direction::East),
            "south_east" => Ok(Direction::SouthEast),
            "south" => Ok(Direction::South),
            "south_west" => Ok(Direction::SouthWest),
            "west" => Ok(Direction::West),
            "north_west" => Ok(Direction::NorthWest),
            _ => Err("Unknown direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::North => "north",
            Direction::NorthEast => "north_east",
            Direction::East => "east",
            Direction::SouthEast => "south_east",
            Direction::South => "south",
            Direction::SouthWest => "south_west",
            Direction::West => "west",
            Direction::NorthWest => "north_west",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
