//! Edge priority classification and route planning.
//!
//! Edges are not all drawn alike: a generalization arrow is routed as an
//! orthogonal multi-segment path, a dependency as a straight line, a
//! self-edge as a loop hugging its node. This module decides which
//! treatment each edge gets and in what order edges are drawn.
//!
//! - [`EdgePriority`] - The discrete priority class of an edge
//! - [`Router`] / [`RoutePlan`] - Deterministic per-edge path planning

mod priority;
mod router;

pub use priority::EdgePriority;
pub use router::{RoutePlan, RoutedEdge, Router};
