//! Error types for Maquette operations.
//!
//! This module provides the main error type [`MaquetteError`], returned by
//! fallible diagram mutations. Every variant signals a logic error on the
//! caller's side: the model performs no I/O and nothing here is transient
//! or retryable. Idempotent no-ops (removing an absent child) do not
//! produce errors at all.

use thiserror::Error;

use crate::diagram::{DiagramKind, EdgeKind, NodeId, NodeKind};

/// The main error type for Maquette diagram operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaquetteError {
    #[error("node kind {kind:?} is not allowed in a {diagram:?} diagram")]
    NodeKindNotAllowed {
        kind: NodeKind,
        diagram: DiagramKind,
    },

    #[error("edge kind {kind:?} is not allowed in a {diagram:?} diagram")]
    EdgeKindNotAllowed {
        kind: EdgeKind,
        diagram: DiagramKind,
    },

    #[error("node {0:?} does not belong to this diagram")]
    UnknownNode(NodeId),

    #[error("attaching {child:?} under {parent:?} would create a containment cycle")]
    ContainmentCycle { parent: NodeId, child: NodeId },
}
