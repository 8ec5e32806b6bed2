//! The label's layout inputs.

use iconlabel_core::{Color, ConfigError, Font, Icon, Padding, TextStyle};

/// Default maximum number of text lines.
pub const DEFAULT_MAX_LINES: u32 = 1;

/// Default line spacing multiplier.
pub const DEFAULT_LINE_SPACING: f64 = 1.3;

/// Immutable snapshot of everything that affects the label's layout.
///
/// Built with [`LayoutInput::new`] and the `with_*` methods, or read from a
/// [`LabelAttributes`](crate::LabelAttributes) document.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInput {
    text: String,
    font: Font,
    color: Color,
    max_lines: u32,
    line_spacing: f64,
    padding: Padding,
    text_left_margin: f64,
    icon: Option<Icon>,
    icon_width: Option<f64>,
    icon_height: Option<f64>,
}

impl Default for LayoutInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: Font::default(),
            color: Color::default(),
            max_lines: DEFAULT_MAX_LINES,
            line_spacing: DEFAULT_LINE_SPACING,
            padding: Padding::default(),
            text_left_margin: 0.0,
            icon: None,
            icon_width: None,
            icon_height: None,
        }
    }
}

impl LayoutInput {
    /// Create an input for `text` with default attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_text_left_margin(mut self, margin: f64) -> Self {
        self.text_left_margin = margin;
        self
    }

    /// Attach an icon drawn at its intrinsic size unless overridden.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Remove the icon (and any explicit icon size).
    pub fn without_icon(mut self) -> Self {
        self.icon = None;
        self.icon_width = None;
        self.icon_height = None;
        self
    }

    /// Override the icon's drawn size.
    pub fn with_icon_size(mut self, width: f64, height: f64) -> Self {
        self.icon_width = Some(width);
        self.icon_height = Some(height);
        self
    }

    pub(crate) fn with_icon_dimensions(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.icon_width = width;
        self.icon_height = height;
        self
    }

    /// Check the invariants the layout relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::InvalidMaxLines {
                value: self.max_lines,
            });
        }
        if !self.line_spacing.is_finite() || self.line_spacing < 1.0 {
            return Err(ConfigError::InvalidLineSpacing {
                value: self.line_spacing,
            });
        }
        ConfigError::check_dimension("text size", self.font.size)?;
        ConfigError::check_dimension("text left margin", self.text_left_margin)?;
        ConfigError::check_dimension("left padding", self.padding.left)?;
        ConfigError::check_dimension("top padding", self.padding.top)?;
        ConfigError::check_dimension("right padding", self.padding.right)?;
        ConfigError::check_dimension("bottom padding", self.padding.bottom)?;
        ConfigError::check_dimension("icon width", self.icon_width())?;
        ConfigError::check_dimension("icon height", self.icon_height())?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn max_lines(&self) -> u32 {
        self.max_lines
    }

    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Drawn icon width; 0 without an icon.
    pub fn icon_width(&self) -> f64 {
        match &self.icon {
            Some(icon) => self.icon_width.unwrap_or(icon.intrinsic_width),
            None => 0.0,
        }
    }

    /// Drawn icon height; 0 without an icon.
    pub fn icon_height(&self) -> f64 {
        match &self.icon {
            Some(icon) => self.icon_height.unwrap_or(icon.intrinsic_height),
            None => 0.0,
        }
    }

    /// Gap between icon and text.
    ///
    /// Always 0 when the icon is absent or has a zero dimension, whatever was configured.
    pub fn text_left_margin(&self) -> f64 {
        if self.icon_width() == 0.0 || self.icon_height() == 0.0 {
            0.0
        } else {
            self.text_left_margin
        }
    }

    /// Left edge of every text line.
    pub fn text_origin_x(&self) -> f64 {
        self.padding.left + self.icon_width() + self.text_left_margin()
    }

    /// Paint state for drawing the text.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font: self.font.clone(),
            color: self.color,
        }
    }
}
