//! Deterministic text measurement for diagram layout.
//!
//! Name-bearing nodes size themselves from their rendered text, so layout
//! correctness depends on text measurement being deterministic: the same
//! string with the same style must always measure to the same
//! [`Dimension`]. This module provides that collaborator.
//!
//! # Overview
//!
//! - [`Alignment`] - Where text sits inside its allotted box
//! - [`Decorations`] - Style flags that affect measurement (bold, padding)
//! - [`StringMeasurer`] - A configured measurer returning pixel dimensions
//!
//! Measurement goes through a process-global font system so repeated
//! queries reuse loaded fonts. Results are rounded up to whole geometry
//! units.
//!
//! # Quick Start
//!
//! ```no_run
//! use maquette_core::text::{Alignment, Decorations, StringMeasurer};
//!
//! let measurer = StringMeasurer::get(Alignment::Center, Decorations::new().padded());
//! let dimension = measurer.dimension("Actor");
//! assert!(dimension.width() > 0);
//! ```

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;

use crate::geometry::Dimension;

/// Font size in points used for all diagram text.
const FONT_SIZE: u16 = 12;

/// Inset added on every side when the `padded` decoration is set.
const TEXT_PADDING: i32 = 7;

/// Where text is anchored inside the box allotted to it.
///
/// Alignment does not affect measurement; it is carried alongside the
/// decorations so renderers can anchor the measured text consistently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Returns true if text is horizontally centered
    pub fn is_horizontally_centered(self) -> bool {
        matches!(
            self,
            Alignment::TopCenter | Alignment::Center | Alignment::BottomCenter
        )
    }

    /// Returns true if text is vertically centered
    pub fn is_vertically_centered(self) -> bool {
        matches!(
            self,
            Alignment::CenterLeft | Alignment::Center | Alignment::CenterRight
        )
    }
}

/// Style flags that influence how text is measured and rendered.
///
/// Built in a chaining style:
///
/// ```
/// use maquette_core::text::Decorations;
///
/// let decorations = Decorations::new().bold().padded();
/// assert!(decorations.is_bold());
/// assert!(decorations.is_padded());
/// assert!(!decorations.is_underlined());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Decorations {
    bold: bool,
    underlined: bool,
    padded: bool,
}

impl Decorations {
    /// Creates a decoration set with no flags enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the bold flag enabled
    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Returns a copy with the underlined flag enabled
    pub fn underlined(self) -> Self {
        Self {
            underlined: true,
            ..self
        }
    }

    /// Returns a copy with the padded flag enabled
    pub fn padded(self) -> Self {
        Self {
            padded: true,
            ..self
        }
    }

    /// Returns whether the bold flag is enabled
    pub fn is_bold(self) -> bool {
        self.bold
    }

    /// Returns whether the underlined flag is enabled
    pub fn is_underlined(self) -> bool {
        self.underlined
    }

    /// Returns whether the padded flag is enabled
    pub fn is_padded(self) -> bool {
        self.padded
    }
}

/// A text measurer configured with an alignment and decoration set.
///
/// Measurement is pure with respect to the configuration: the same
/// string always yields the same [`Dimension`] for the same measurer
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringMeasurer {
    alignment: Alignment,
    decorations: Decorations,
}

impl StringMeasurer {
    /// Returns a measurer for the given alignment and decorations.
    pub fn get(alignment: Alignment, decorations: Decorations) -> Self {
        Self {
            alignment,
            decorations,
        }
    }

    /// Returns the configured alignment.
    pub fn alignment(self) -> Alignment {
        self.alignment
    }

    /// Returns the configured decorations.
    pub fn decorations(self) -> Decorations {
        self.decorations
    }

    /// Measures the dimension of the given text.
    ///
    /// Empty text measures 0x0 regardless of decorations. Non-empty text
    /// is shaped through the global font system; if the padded decoration
    /// is set, [`TEXT_PADDING`] units are added on every side.
    pub fn dimension(self, text: &str) -> Dimension {
        if text.is_empty() {
            return Dimension::default();
        }
        let raw = FONT_METRICS
            .get_or_init(FontMetrics::new)
            .measure(text, self.decorations.is_bold());
        if self.decorations.is_padded() {
            raw.expanded(2 * TEXT_PADDING, 2 * TEXT_PADDING)
        } else {
            raw
        }
    }
}

/// FontMetrics handles text measurement and font operations.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
struct FontMetrics {
    font_system: Arc<Mutex<FontSystem>>,
}

impl FontMetrics {
    /// Create a new FontMetrics with a default FontSystem
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measure the rendered size of text in geometry units using cosmic-text.
    ///
    /// Shaping accounts for ligatures, kerning, and font fallback, so the
    /// result reflects what a renderer would actually produce. Fractional
    /// pixel sizes round up so measured boxes never clip their text.
    fn measure(&self, text: &str, bold: bool) -> Dimension {
        // Lock the FontSystem for use
        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Convert font size from points to pixels (roughly 1.33x multiplier for standard DPI)
        let font_size_px = FONT_SIZE as f32 * 1.33;

        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if bold { Weight::BOLD } else { Weight::NORMAL };
        let attrs = Attrs::new().family(Family::SansSerif).weight(weight);

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                // Rightmost glyph position bounds the run width
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // Fallback estimate when no fonts are available
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Dimension::new(max_width.ceil() as i32, total_height.ceil() as i32)
    }
}

// Single global instance so font loading happens once per process.
static FONT_METRICS: OnceLock<FontMetrics> = OnceLock::new();
