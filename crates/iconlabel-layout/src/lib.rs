//! Layout computation for the icon label widget.
//!
//! This crate turns a [`LayoutInput`] (text, font, icon size, spacing) into
//! widget dimensions and positioned display lines.
//!
//! # Architecture
//!
//! 1. **Measurement**: single-line metrics, computed once per text/font change
//! 2. **Sizing**: resolves width/height from the host's measure specs
//! 3. **Line breaking**: greedy wrap, truncation with an ellipsis
//! 4. **Placement**: baseline of each line in a vertically centered block
//!
//! # Example
//!
//! ```
//! use iconlabel_core::{FixedAdvanceFont, MeasureSpec};
//! use iconlabel_layout::{IconLabel, LayoutInput};
//!
//! let input = LayoutInput::new("Hello World")
//!     .with_font_size(20.0)
//!     .with_max_lines(2);
//! let mut label = IconLabel::new(input, FixedAdvanceFont::default())?;
//! label.measure(MeasureSpec::exact(70.0), MeasureSpec::exact(100.0));
//!
//! let plan = label.plan()?;
//! assert_eq!(plan.lines[0].text, "Hello W");
//! assert_eq!(plan.lines[1].text, "orld");
//! # Ok::<(), iconlabel_core::LabelError>(())
//! ```

mod attributes;
mod breaker;
mod input;
mod label;
mod metrics;
mod placement;
mod sizing;

pub use attributes::{ColorValue, IconAttributes, LabelAttributes};
pub use breaker::{break_lines, text_width_budget, BrokenLines, Lines, ELLIPSIS};
pub use input::LayoutInput;
pub use label::{DisplayLine, DrawPlan, IconLabel};
pub use metrics::{measure, SingleLineMetrics};
pub use placement::place_lines;
pub use sizing::{desired_height, desired_width, resolve_axis, resolve_size, ResolvedSize};
