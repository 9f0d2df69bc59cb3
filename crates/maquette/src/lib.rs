//! Maquette - diagram model and layout engine for a UML editor.
//!
//! This crate is the headless core of the Maquette diagram editor. It owns
//! the structural model (nodes, containment, typed edges), computes each
//! node's bounds and connection points through per-kind viewer strategies,
//! classifies edges into routing priorities, and plans deterministic edge
//! paths. The GUI shell consumes these results; nothing here paints pixels
//! or handles events.
//!
//! # Overview
//!
//! - [`diagram`] - The structural model: [`diagram::Diagram`], nodes, edges
//! - [`viewers`] - Per-node-kind layout strategies and their registry
//! - [`layout`] - Edge priority classification and route planning
//! - [`export`] - SVG snapshots of a computed layout
//! - [`config`] - Router configuration
//!
//! # Quick Start
//!
//! ```
//! use maquette::diagram::{Diagram, DiagramKind, NodeKind};
//! use maquette::viewers::ViewerRegistry;
//! use maquette::geometry::Direction;
//!
//! # fn main() -> Result<(), maquette::MaquetteError> {
//! let mut diagram = Diagram::new(DiagramKind::Object);
//! let object = diagram.create_node(NodeKind::Object)?;
//!
//! let registry = ViewerRegistry::default();
//! let bounds = registry.bounds(&diagram, object);
//! let east = registry.connection_point(&diagram, object, Direction::East);
//! assert_eq!(east.x(), bounds.max_x());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread safety
//!
//! Diagram mutation and layout queries are meant for a single logical
//! thread (the editor's event thread). None of the types here synchronize
//! access; only the font system used for text measurement is internally
//! locked.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod viewers;

mod error;

pub use error::MaquetteError;

pub use maquette_core::{geometry, text};
