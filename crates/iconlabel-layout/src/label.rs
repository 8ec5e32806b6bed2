//! The icon label widget.

use std::fmt;

use iconlabel_core::{
    Bounds, Color, ConfigError, DrawSurface, FontMetrics, Icon, LayoutError, MeasureSpec, Padding,
    TextStyle,
};

use crate::attributes::LabelAttributes;
use crate::breaker::{break_lines, text_width_budget};
use crate::input::LayoutInput;
use crate::metrics::{measure, SingleLineMetrics};
use crate::placement::place_lines;
use crate::sizing::{resolve_size, ResolvedSize};

/// One line of text ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    pub text: String,
    /// Left edge of the line
    pub x: f64,
    /// Baseline Y
    pub baseline: f64,
}

/// Everything needed to paint one frame of a label.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    pub size: ResolvedSize,
    pub icon: Option<Icon>,
    /// Where the icon is drawn; empty without an icon
    pub icon_bounds: Bounds,
    pub lines: Vec<DisplayLine>,
    /// Whether overflow text was cut and ellipsized
    pub truncated: bool,
    pub style: TextStyle,
}

impl DrawPlan {
    /// Issue the draw calls: icon first, then lines top to bottom.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if let Some(icon) = &self.icon {
            surface.draw_bitmap(icon, self.icon_bounds);
        }
        for line in &self.lines {
            surface.draw_text(&line.text, line.x, line.baseline, &self.style);
        }
    }
}

/// A widget showing an optional icon beside wrapped, ellipsized text.
///
/// The label owns its [`LayoutInput`] and two derived caches: the
/// single-line metrics, recomputed eagerly by every setter, and the resolved
/// size, dropped by every setter and filled by [`IconLabel::measure`].
/// Drawing never changes either.
pub struct IconLabel<M> {
    input: LayoutInput,
    font_metrics: M,
    metrics: SingleLineMetrics,
    size: Option<ResolvedSize>,
}

impl<M: FontMetrics> IconLabel<M> {
    /// Create a label from a layout input.
    pub fn new(input: LayoutInput, font_metrics: M) -> Result<Self, ConfigError> {
        input.validate()?;
        let metrics = measure(&font_metrics, input.text(), input.font());
        Ok(Self {
            input,
            font_metrics,
            metrics,
            size: None,
        })
    }

    /// Create a label from an attribute document.
    pub fn from_attributes(attributes: LabelAttributes, font_metrics: M) -> Result<Self, ConfigError> {
        Self::new(attributes.into_input()?, font_metrics)
    }

    pub fn input(&self) -> &LayoutInput {
        &self.input
    }

    pub fn font_metrics(&self) -> &M {
        &self.font_metrics
    }

    /// Metrics of the current text on one line.
    pub fn metrics(&self) -> SingleLineMetrics {
        self.metrics
    }

    /// Size from the last [`IconLabel::measure`], if nothing changed since.
    pub fn size(&self) -> Option<ResolvedSize> {
        self.size
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let input = self.input.clone().with_text(text);
        self.replace_input(input);
    }

    pub fn set_color(&mut self, color: Color) {
        let input = self.input.clone().with_color(color);
        self.replace_input(input);
    }

    pub fn set_font_size(&mut self, size: f64) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_font_size(size))
    }

    pub fn set_max_lines(&mut self, max_lines: u32) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_max_lines(max_lines))
    }

    pub fn set_line_spacing(&mut self, line_spacing: f64) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_line_spacing(line_spacing))
    }

    pub fn set_padding(&mut self, padding: Padding) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_padding(padding))
    }

    pub fn set_text_left_margin(&mut self, margin: f64) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_text_left_margin(margin))
    }

    /// Replace or remove the icon. An explicit icon size is kept.
    pub fn set_icon(&mut self, icon: Option<Icon>) -> Result<(), ConfigError> {
        let input = match icon {
            Some(icon) => self.input.clone().with_icon(icon),
            None => self.input.clone().without_icon(),
        };
        self.update(input)
    }

    pub fn set_icon_size(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        self.update(self.input.clone().with_icon_size(width, height))
    }

    /// Validate and install a new input.
    pub fn update(&mut self, input: LayoutInput) -> Result<(), ConfigError> {
        input.validate()?;
        self.replace_input(input);
        Ok(())
    }

    fn replace_input(&mut self, input: LayoutInput) {
        self.metrics = measure(&self.font_metrics, input.text(), input.font());
        self.input = input;
        self.size = None;
    }

    /// Resolve the widget size against the host's constraints and cache it.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> ResolvedSize {
        log::debug!("measure: width_spec={width_spec:?}, height_spec={height_spec:?}");
        let size = resolve_size(&self.input, &self.metrics, width_spec, height_spec);
        self.size = Some(size);
        size
    }

    /// Lay out one frame: icon bounds plus positioned, truncated lines.
    ///
    /// Fails if the label has not been measured or the icon leaves no room for text.
    pub fn plan(&self) -> Result<DrawPlan, LayoutError> {
        let size = self.size.ok_or(LayoutError::NotMeasured)?;
        let input = &self.input;

        let budget = text_width_budget(input, size.width)?;
        let broken = break_lines(
            &self.font_metrics,
            input.text(),
            input.font(),
            budget,
            input.max_lines(),
        )?;

        let baselines = place_lines(
            broken.lines.len(),
            input.max_lines(),
            self.metrics.line_height,
            input.line_spacing(),
            size.height,
        );

        let x = input.text_origin_x();
        let lines = broken
            .lines
            .into_iter()
            .zip(baselines)
            .map(|(text, baseline)| DisplayLine { text, x, baseline })
            .collect();

        let padding = input.padding();
        let icon_bounds = match input.icon() {
            Some(_) => Bounds::new(
                padding.left,
                padding.top,
                input.icon_width(),
                input.icon_height(),
            ),
            None => Bounds::default(),
        };

        Ok(DrawPlan {
            size,
            icon: input.icon().cloned(),
            icon_bounds,
            lines,
            truncated: broken.truncated,
            style: input.text_style(),
        })
    }

    /// Paint the label onto `surface`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), LayoutError> {
        log::debug!("draw: {self}");
        let plan = self.plan()?;
        plan.draw(surface);
        Ok(())
    }
}

impl<M> fmt::Display for IconLabel<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "icon_width={}, desired_width={}, line_height={}",
            self.input.icon_width(),
            self.metrics.desired_width,
            self.metrics.line_height
        )
    }
}

impl<M> fmt::Debug for IconLabel<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconLabel")
            .field("input", &self.input)
            .field("metrics", &self.metrics)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
