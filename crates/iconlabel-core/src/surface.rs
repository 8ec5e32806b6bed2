//! Drawing surface contract.

use crate::types::{Bounds, Color, Font, Icon};

/// Paint state for a run of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: Font,
    pub color: Color,
}

/// A target that accepts the label's draw calls.
///
/// The label issues the icon first, then each text line top to bottom.
/// Text is left-aligned at `x`; `y` is the baseline.
pub trait DrawSurface {
    /// Draw `icon` scaled into `bounds`.
    fn draw_bitmap(&mut self, icon: &Icon, bounds: Bounds);

    /// Draw one line of text anchored at its baseline.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw_bitmap(&mut self, icon: &Icon, bounds: Bounds) {
        (**self).draw_bitmap(icon, bounds)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        (**self).draw_text(text, x, y, style)
    }
}
