//! Font metrics contract.
//!
//! The layout engine never touches a font file. It asks a [`FontMetrics`]
//! provider for advances, ink bounds and break points, so a host can plug in
//! its own text stack. [`FixedAdvanceFont`] is a deterministic provider that
//! needs no font data at all.

use unicode_width::UnicodeWidthChar;

use crate::types::Font;

/// Ink bounds of a string rendered on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub width: f64,
    pub height: f64,
}

/// Text measurement provided by the host.
///
/// Offsets and counts are in `char`s, not bytes.
pub trait FontMetrics {
    /// Pixel width of `text` on a single line (sum of advances).
    fn measure_width(&self, text: &str, font: &Font) -> f64;

    /// Ink bounding box of `text` on a single line.
    fn text_bounds(&self, text: &str, font: &Font) -> TextBounds;

    /// Number of characters, starting at char `offset`, whose combined width
    /// does not exceed `budget`.
    ///
    /// The default implementation re-measures each growing prefix.
    fn break_text(&self, text: &str, offset: usize, budget: f64, font: &Font) -> usize {
        let rest = skip_chars(text, offset);
        let mut count = 0;
        for (idx, ch) in rest.char_indices() {
            let end = idx + ch.len_utf8();
            if self.measure_width(&rest[..end], font) > budget {
                break;
            }
            count += 1;
        }
        count
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn measure_width(&self, text: &str, font: &Font) -> f64 {
        (**self).measure_width(text, font)
    }

    fn text_bounds(&self, text: &str, font: &Font) -> TextBounds {
        (**self).text_bounds(text, font)
    }

    fn break_text(&self, text: &str, offset: usize, budget: f64, font: &Font) -> usize {
        (**self).break_text(text, offset, budget, font)
    }
}

/// Slice of `text` starting at char `offset` (empty if past the end).
pub fn skip_chars(text: &str, offset: usize) -> &str {
    match text.char_indices().nth(offset) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// Characters that reach below the baseline.
const DESCENDERS: &str = "gjpqy,;()[]{}|";

/// A metrics provider with a fixed advance per terminal column.
///
/// Narrow characters advance `advance_ratio * size`, wide (East Asian)
/// characters twice that, and zero-width characters not at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceFont {
    /// Advance of one column as a fraction of the font size
    pub advance_ratio: f64,
    /// Ascent as a fraction of the font size
    pub ascent_ratio: f64,
    /// Descent as a fraction of the font size
    pub descent_ratio: f64,
}

impl Default for FixedAdvanceFont {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            ascent_ratio: 0.75,
            descent_ratio: 0.25,
        }
    }
}

impl FixedAdvanceFont {
    fn advance(&self, ch: char, font: &Font) -> f64 {
        let columns = ch.width().unwrap_or(0) as f64;
        columns * self.advance_ratio * font.size
    }
}

impl FontMetrics for FixedAdvanceFont {
    fn measure_width(&self, text: &str, font: &Font) -> f64 {
        text.chars().map(|ch| self.advance(ch, font)).sum()
    }

    fn text_bounds(&self, text: &str, font: &Font) -> TextBounds {
        let inked = text.chars().any(|ch| !ch.is_whitespace());
        if !inked {
            return TextBounds {
                width: self.measure_width(text, font),
                height: 0.0,
            };
        }

        let mut height = self.ascent_ratio * font.size;
        if text.chars().any(|ch| DESCENDERS.contains(ch)) {
            height += self.descent_ratio * font.size;
        }

        TextBounds {
            width: self.measure_width(text, font),
            height,
        }
    }

    fn break_text(&self, text: &str, offset: usize, budget: f64, font: &Font) -> usize {
        let mut used = 0.0;
        let mut count = 0;
        for ch in skip_chars(text, offset).chars() {
            used += self.advance(ch, font);
            if used > budget {
                break;
            }
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that only implements the required methods.
    struct PrefixOnly(FixedAdvanceFont);

    impl FontMetrics for PrefixOnly {
        fn measure_width(&self, text: &str, font: &Font) -> f64 {
            self.0.measure_width(text, font)
        }

        fn text_bounds(&self, text: &str, font: &Font) -> TextBounds {
            self.0.text_bounds(text, font)
        }
    }

    #[test]
    fn test_measure_width_ascii() {
        let metrics = FixedAdvanceFont::default();
        let font = Font::new(20.0);
        assert_eq!(metrics.measure_width("Hello World", &font), 110.0);
        assert_eq!(metrics.measure_width("", &font), 0.0);
    }

    #[test]
    fn test_measure_width_wide_chars() {
        let metrics = FixedAdvanceFont::default();
        let font = Font::new(20.0);
        // Two wide characters, two columns each
        assert_eq!(metrics.measure_width("日本", &font), 40.0);
    }

    #[test]
    fn test_text_bounds_height() {
        let metrics = FixedAdvanceFont::default();
        let font = Font::new(20.0);
        assert_eq!(metrics.text_bounds("Hello", &font).height, 15.0);
        assert_eq!(metrics.text_bounds("Happy", &font).height, 20.0);
        assert_eq!(metrics.text_bounds("   ", &font).height, 0.0);
        assert_eq!(metrics.text_bounds("", &font), TextBounds::default());
    }

    #[test]
    fn test_break_text_counts_fitting_chars() {
        let metrics = FixedAdvanceFont::default();
        let font = Font::new(20.0);
        assert_eq!(metrics.break_text("Hello World", 0, 70.0, &font), 7);
        assert_eq!(metrics.break_text("Hello World", 7, 70.0, &font), 4);
        assert_eq!(metrics.break_text("Hello World", 11, 70.0, &font), 0);
        assert_eq!(metrics.break_text("Hello", 0, 5.0, &font), 0);
    }

    #[test]
    fn test_default_break_text_matches_override() {
        let fixed = FixedAdvanceFont::default();
        let prefix = PrefixOnly(fixed);
        let font = Font::new(14.0);
        let text = "naïve café, 日本語 text";
        for offset in 0..text.chars().count() {
            for budget in [0.0, 7.0, 20.0, 55.5, 300.0] {
                assert_eq!(
                    prefix.break_text(text, offset, budget, &font),
                    fixed.break_text(text, offset, budget, &font),
                    "offset {offset}, budget {budget}"
                );
            }
        }
    }

    #[test]
    fn test_skip_chars() {
        assert_eq!(skip_chars("héllo", 2), "llo");
        assert_eq!(skip_chars("héllo", 5), "");
        assert_eq!(skip_chars("héllo", 9), "");
    }
}
