//! Configuration for the edge router.
//!
//! The numeric routing knobs live here so an embedding application can
//! load them from an external source. All fields have defaults and are
//! optional when deserialized.

use serde::Deserialize;

fn default_self_loop_size() -> i32 {
    20
}

fn default_parallel_spacing() -> i32 {
    12
}

/// Numeric knobs for edge route planning.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Side length of the loop drawn for self-edges.
    #[serde(default = "default_self_loop_size")]
    self_loop_size: i32,

    /// Perpendicular spacing between parallel straight edges connecting
    /// the same pair of nodes.
    #[serde(default = "default_parallel_spacing")]
    parallel_spacing: i32,
}

impl RouterConfig {
    /// Creates a configuration with the given knob values.
    pub fn new(self_loop_size: i32, parallel_spacing: i32) -> Self {
        Self {
            self_loop_size,
            parallel_spacing,
        }
    }

    /// Returns the side length of the self-edge loop.
    pub fn self_loop_size(&self) -> i32 {
        self.self_loop_size
    }

    /// Returns the spacing between parallel straight edges.
    pub fn parallel_spacing(&self) -> i32 {
        self.parallel_spacing
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            self_loop_size: default_self_loop_size(),
            parallel_spacing: default_parallel_spacing(),
        }
    }
}
