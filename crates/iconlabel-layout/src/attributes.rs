//! Attribute documents for configuring a label.
//!
//! Hosts describe a label once, at construction, as a JSON document:
//!
//! ```json
//! {
//!   "text": "Open the pod bay doors",
//!   "text_color": "#FF333333",
//!   "text_size": 14,
//!   "max_lines": 2,
//!   "line_spacing": 1.3,
//!   "text_left_margin": 8,
//!   "padding": { "left": 4, "top": 4, "right": 4, "bottom": 4 },
//!   "icon": { "source": "pod.png", "intrinsic_width": 48, "intrinsic_height": 48, "width": 24, "height": 24 }
//! }
//! ```

use iconlabel_core::{Color, ConfigError, Font, Icon, Padding};
use serde::{Deserialize, Serialize};

use crate::input::{LayoutInput, DEFAULT_LINE_SPACING, DEFAULT_MAX_LINES};

/// A color given as a hex string or a packed `0xAARRGGBB` integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Argb(u32),
}

impl ColorValue {
    pub fn to_color(&self) -> Result<Color, ConfigError> {
        match self {
            ColorValue::Hex(hex) => {
                Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor { value: hex.clone() })
            }
            ColorValue::Argb(argb) => Ok(Color::from_argb32(*argb)),
        }
    }
}

/// Icon attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconAttributes {
    pub source: String,
    /// Natural bitmap width
    pub intrinsic_width: f64,
    /// Natural bitmap height
    pub intrinsic_height: f64,
    /// Drawn width; defaults to the intrinsic width
    #[serde(default)]
    pub width: Option<f64>,
    /// Drawn height; defaults to the intrinsic height
    #[serde(default)]
    pub height: Option<f64>,
}

/// The full attribute set of a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelAttributes {
    /// Missing text is treated as empty
    pub text: Option<String>,
    pub text_color: Option<ColorValue>,
    pub text_size: f64,
    pub font_family: Option<String>,
    pub text_left_margin: f64,
    pub max_lines: u32,
    pub line_spacing: f64,
    pub padding: Padding,
    pub icon: Option<IconAttributes>,
}

impl Default for LabelAttributes {
    fn default() -> Self {
        Self {
            text: None,
            text_color: None,
            text_size: 0.0,
            font_family: None,
            text_left_margin: 0.0,
            max_lines: DEFAULT_MAX_LINES,
            line_spacing: DEFAULT_LINE_SPACING,
            padding: Padding::default(),
            icon: None,
        }
    }
}

impl LabelAttributes {
    /// Parse an attribute document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Validate the attributes and build the layout input.
    pub fn into_input(self) -> Result<LayoutInput, ConfigError> {
        let color = match &self.text_color {
            Some(value) => value.to_color()?,
            None => Color::default(),
        };

        let mut font = Font::new(self.text_size);
        font.family = self.font_family;

        let mut input = LayoutInput::new(self.text.unwrap_or_default())
            .with_font(font)
            .with_color(color)
            .with_max_lines(self.max_lines)
            .with_line_spacing(self.line_spacing)
            .with_padding(self.padding)
            .with_text_left_margin(self.text_left_margin);

        if let Some(icon) = self.icon {
            input = input
                .with_icon(Icon::new(icon.source, icon.intrinsic_width, icon.intrinsic_height))
                .with_icon_dimensions(icon.width, icon.height);
        }

        input.validate()?;
        Ok(input)
    }
}
