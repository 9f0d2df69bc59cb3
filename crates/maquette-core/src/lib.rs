//! Maquette Core Types and Definitions
//!
//! This crate provides the foundational types for the Maquette diagram
//! model. It includes:
//!
//! - **Geometry**: Integer-precise geometric types ([`geometry`] module)
//! - **Text**: Deterministic text measurement ([`text`] module)
//!
//! Diagram layout in Maquette is pixel-exact: every bound and connection
//! point is an integer coordinate, and measuring the same string twice
//! yields the same dimension. The types here carry no diagram semantics;
//! the structural model and layout strategies live in the `maquette` crate.

pub mod geometry;
pub mod text;
