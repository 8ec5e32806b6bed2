//! Drawing surfaces for the icon label widget.
//!
//! Supported surfaces:
//! - [`DrawList`]: records draw calls in order
//! - [`SvgSurface`]: writes an SVG document

pub mod list;

#[cfg(feature = "svg")]
pub mod svg;

use iconlabel_core::{FontMetrics, LayoutError};
use iconlabel_layout::IconLabel;

pub use list::{DrawCommand, DrawList};

#[cfg(feature = "svg")]
pub use svg::SvgSurface;

/// Record a measured label's draw calls.
pub fn record<M: FontMetrics>(label: &IconLabel<M>) -> Result<DrawList, LayoutError> {
    let mut list = DrawList::new();
    label.draw(&mut list)?;
    log::debug!("recorded {} draw command(s)", list.commands().len());
    Ok(list)
}

/// Render a measured label to an SVG document sized to the label.
#[cfg(feature = "svg")]
pub fn export_svg<M: FontMetrics>(label: &IconLabel<M>) -> Result<String, LayoutError> {
    let size = label.size().ok_or(LayoutError::NotMeasured)?;
    let mut surface = SvgSurface::new(size.width, size.height);
    label.draw(&mut surface)?;
    log::debug!("exported label as {}x{} svg", size.width, size.height);
    Ok(surface.finish())
}
