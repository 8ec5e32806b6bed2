//! Core value types for the icon label widget.

use glam::Vec2;

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(255, r, g, b)
    }

    /// Create from 8-bit ARGB values.
    pub fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a packed `0xAARRGGBB` value.
    pub fn from_argb32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_argb8(a, r, g, b)
    }

    /// Create from hex string (e.g., "#333333" or "#FF333333").
    ///
    /// Eight-digit strings carry the alpha channel first (`AARRGGBB`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Format as `#rrggbb`, dropping alpha.
    pub fn to_hex_rgb(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    /// Dark gray (`0xFF333333`), the label's default text color.
    fn default() -> Self {
        Self::from_argb32(0xFF33_3333)
    }
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Create uniform padding.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric padding.
    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// How a host constrains one axis of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The size is forced.
    Exact,
    /// The size is an upper bound; content may shrink below it.
    AtMost,
    /// The host imposes nothing; the size is advisory.
    #[default]
    Unspecified,
}

/// A (mode, size) constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f64,
}

impl MeasureSpec {
    pub const fn new(mode: MeasureMode, size: f64) -> Self {
        Self { mode, size }
    }

    pub const fn exact(size: f64) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    pub const fn at_most(size: f64) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    pub const fn unspecified(size: f64) -> Self {
        Self::new(MeasureMode::Unspecified, size)
    }
}

/// A bitmap resource drawn beside the text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    /// Host-defined resource locator (path, URI, resource name)
    pub source: String,
    /// Natural bitmap width in pixels
    pub intrinsic_width: f64,
    /// Natural bitmap height in pixels
    pub intrinsic_height: f64,
}

impl Icon {
    pub fn new(source: impl Into<String>, intrinsic_width: f64, intrinsic_height: f64) -> Self {
        Self {
            source: source.into(),
            intrinsic_width,
            intrinsic_height,
        }
    }
}

/// Font descriptor handed to the [`FontMetrics`](crate::FontMetrics) provider.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Font size in pixels
    pub size: f64,
    /// Optional family name (provider-defined meaning)
    pub family: Option<String>,
}

impl Font {
    pub fn new(size: f64) -> Self {
        Self { size, family: None }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#333333").unwrap();
        assert_eq!(c.to_rgba8(), (0x33, 0x33, 0x33, 0xFF));

        let c = Color::from_hex("80FF0000").unwrap();
        assert_eq!(c.to_rgba8(), (0xFF, 0x00, 0x00, 0x80));

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
        assert!(Color::from_hex("##333333").is_none());
        assert!(Color::from_hex("#".repeat(7).as_str()).is_none());
    }

    #[test]
    fn test_color_default_is_dark_gray() {
        assert_eq!(Color::default(), Color::from_hex("#FF333333").unwrap());
        assert_eq!(Color::default().to_hex_rgb(), "#333333");
    }

    #[test]
    fn test_padding_totals() {
        let p = Padding { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };
        assert_eq!(p.horizontal(), 6.0);
        assert_eq!(p.vertical(), 4.0);
        assert_eq!(Padding::symmetric(5.0, 2.0).horizontal(), 10.0);
    }

    #[test]
    fn test_bounds_as_vectors() {
        let b = Bounds::new(4.0, 2.0, 32.0, 24.0);
        assert_eq!(b.position(), Vec2::new(4.0, 2.0));
        assert_eq!(b.size(), Vec2::new(32.0, 24.0));
    }
}
