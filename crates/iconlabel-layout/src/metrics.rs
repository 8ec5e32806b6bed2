//! Single-line text metrics.

use iconlabel_core::{Font, FontMetrics};

/// Metrics of the label text rendered on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SingleLineMetrics {
    /// Sum of glyph advances for the whole string
    pub desired_width: f64,
    /// Ink height (ascent + descent) of the whole string
    pub line_height: f64,
}

/// Measure `text` as a single line.
///
/// Empty text yields zero width. Deterministic for a given provider, text and font.
pub fn measure<M: FontMetrics + ?Sized>(metrics: &M, text: &str, font: &Font) -> SingleLineMetrics {
    if text.is_empty() {
        return SingleLineMetrics::default();
    }

    let desired_width = metrics.measure_width(text, font);
    let line_height = metrics.text_bounds(text, font).height;

    log::debug!(
        "single-line metrics: desired_width={desired_width}, line_height={line_height}"
    );

    SingleLineMetrics {
        desired_width,
        line_height,
    }
}
