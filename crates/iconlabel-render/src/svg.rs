//! SVG surface.

use iconlabel_core::{Bounds, Color, DrawSurface, Icon, TextStyle};

/// Writes draw calls as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);

        let mut svg = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
            width, height, width, height
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn draw_bitmap(&mut self, icon: &Icon, bounds: Bounds) {
        self.body.push_str(&format!(
            "  <image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
            escape_xml(&icon.source),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        ));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let mut attrs = format!(
            "x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\"",
            x,
            y,
            style.color.to_hex_rgb(),
            style.font.size
        );
        if style.color.a < 1.0 {
            attrs.push_str(&format!(" fill-opacity=\"{}\"", opacity(&style.color)));
        }
        if let Some(family) = &style.font.family {
            attrs.push_str(&format!(" font-family=\"{}\"", escape_xml(family)));
        }

        // SVG collapses runs of spaces unless told otherwise
        self.body.push_str(&format!(
            "  <text {} xml:space=\"preserve\">{}</text>\n",
            attrs,
            escape_xml(text)
        ));
    }
}

fn opacity(color: &Color) -> f32 {
    (color.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconlabel_core::{FixedAdvanceFont, Font, MeasureSpec};
    use iconlabel_layout::{IconLabel, LayoutInput};

    use crate::export_svg;

    #[test]
    fn test_export_label() {
        let input = LayoutInput::new("Tom & Jerry")
            .with_font_size(20.0)
            .with_color(Color::from_rgb8(0x1e, 0x88, 0xe5))
            .with_icon(Icon::new("cat.png", 16.0, 16.0))
            .with_text_left_margin(4.0);
        let mut label = IconLabel::new(input, FixedAdvanceFont::default()).unwrap();
        label.measure(MeasureSpec::at_most(400.0), MeasureSpec::at_most(400.0));

        let svg = export_svg(&label).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="130" height="20""#));
        assert!(svg.contains(r#"<image href="cat.png" x="0" y="0" width="16" height="16"/>"#));
        assert!(svg.contains("Tom &amp; Jerry</text>"));
        assert!(svg.contains(r##"fill="#1e88e5""##));
        assert!(svg.trim_end().ends_with("</svg>"));

        let image_at = svg.find("<image").unwrap();
        let text_at = svg.find("<text").unwrap();
        assert!(image_at < text_at);
    }

    #[test]
    fn test_translucent_text_with_family() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        let style = TextStyle {
            font: Font::new(12.0).with_family("Inter"),
            color: Color::from_argb32(0x8000_0000),
        };
        surface.draw_text("a<b", 1.0, 9.0, &style);
        let svg = surface.finish();
        assert!(svg.contains(r#"fill-opacity="0.502""#));
        assert!(svg.contains(r#"font-family="Inter""#));
        assert!(svg.contains("a&lt;b"));
    }

    #[test]
    fn test_export_requires_measure() {
        let label = IconLabel::new(LayoutInput::new("x"), FixedAdvanceFont::default()).unwrap();
        assert!(export_svg(&label).is_err());
    }
}
