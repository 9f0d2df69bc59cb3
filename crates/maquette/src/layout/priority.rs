//! Edge priority classification.

use serde::{Deserialize, Serialize};

use crate::diagram::{AggregationKind, Edge, EdgeKind, GeneralizationKind};

/// The discrete priority class of an edge.
///
/// The declaration order is the draw order: inheritance edges are routed
/// and drawn before implementation edges, and so on down to the
/// unclassified catch-all. The class also determines an edge's
/// segmentation style and whether it belongs to the diagram's stored
/// structural edge set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EdgePriority {
    Inheritance,
    Implementation,
    Aggregation,
    Composition,
    Association,
    Dependency,
    SelfEdge,
    Other,
}

impl EdgePriority {
    /// Classifies an edge.
    ///
    /// An edge whose two endpoints are the same node is always
    /// [`EdgePriority::SelfEdge`], whatever its declared kind; the
    /// degenerate geometry overrides the type-based treatment. Kinds with
    /// no class of their own (note connectors, state transitions, ...)
    /// fall into [`EdgePriority::Other`].
    pub fn of(edge: &Edge) -> Self {
        if edge.is_self_edge() {
            return EdgePriority::SelfEdge;
        }
        match edge.kind() {
            EdgeKind::Generalization(GeneralizationKind::Inheritance) => EdgePriority::Inheritance,
            EdgeKind::Generalization(GeneralizationKind::Implementation) => {
                EdgePriority::Implementation
            }
            EdgeKind::Aggregation(AggregationKind::Aggregation) => EdgePriority::Aggregation,
            EdgeKind::Aggregation(AggregationKind::Composition) => EdgePriority::Composition,
            EdgeKind::Association => EdgePriority::Association,
            EdgeKind::Dependency => EdgePriority::Dependency,
            _ => EdgePriority::Other,
        }
    }

    /// Returns true if edges of this class are routed as orthogonal
    /// multi-segment paths rather than straight lines.
    pub fn is_segmented(self) -> bool {
        matches!(
            self,
            EdgePriority::Inheritance
                | EdgePriority::Implementation
                | EdgePriority::Aggregation
                | EdgePriority::Composition
                | EdgePriority::Association
        )
    }

    /// Returns true if the edge is routed as an orthogonal multi-segment
    /// path.
    pub fn is_segmented_edge(edge: &Edge) -> bool {
        Self::of(edge).is_segmented()
    }

    /// Returns true if the edge belongs to the diagram's stored structural
    /// edge set. Only unclassified edges (note-style annotations) are
    /// excluded; self-edges are stored despite their degenerate geometry.
    pub fn is_stored_edge(edge: &Edge) -> bool {
        Self::of(edge) != EdgePriority::Other
    }
}
