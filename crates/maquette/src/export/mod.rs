//! Exporters consuming a computed layout.
//!
//! Exporters are pure consumers: they read node bounds, connection
//! points, and planned edge routes, and never feed anything back into the
//! model.

pub mod svg;

pub use svg::SvgExporter;
