//! Resolving widget size from the host's measure specs.

use iconlabel_core::{MeasureMode, MeasureSpec};

use crate::input::LayoutInput;
use crate::metrics::SingleLineMetrics;

/// Final widget dimensions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedSize {
    pub width: f64,
    pub height: f64,
}

impl ResolvedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolve one axis.
///
/// - `Exact`: the constraint wins outright.
/// - `AtMost`: shrink to content, never past the constraint.
/// - `Unspecified`: the raw size passes through, so a size of 0 resolves to 0.
pub fn resolve_axis(mode: MeasureMode, size: f64, desired_content: f64) -> f64 {
    match mode {
        MeasureMode::Exact => size,
        MeasureMode::AtMost => size.min(desired_content),
        MeasureMode::Unspecified => size,
    }
}

/// Content width with the whole text on one line.
pub fn desired_width(input: &LayoutInput, metrics: &SingleLineMetrics) -> f64 {
    input.padding().horizontal()
        + input.icon_width()
        + input.text_left_margin()
        + metrics.desired_width
}

/// Content height of a single line beside the icon.
pub fn desired_height(input: &LayoutInput, metrics: &SingleLineMetrics) -> f64 {
    input.padding().vertical() + input.icon_height().max(metrics.line_height)
}

/// Resolve both axes.
pub fn resolve_size(
    input: &LayoutInput,
    metrics: &SingleLineMetrics,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> ResolvedSize {
    let width = resolve_axis(width_spec.mode, width_spec.size, desired_width(input, metrics));
    let height = resolve_axis(
        height_spec.mode,
        height_spec.size,
        desired_height(input, metrics),
    );

    log::debug!("resolved size: width={width}, height={height}");

    ResolvedSize { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconlabel_core::{Icon, Padding};
    use proptest::prelude::*;

    fn metrics(desired_width: f64, line_height: f64) -> SingleLineMetrics {
        SingleLineMetrics {
            desired_width,
            line_height,
        }
    }

    #[test]
    fn test_unspecified_passes_size_through() {
        assert_eq!(resolve_axis(MeasureMode::Unspecified, 0.0, 120.0), 0.0);
        assert_eq!(resolve_axis(MeasureMode::Unspecified, 300.0, 120.0), 300.0);
    }

    #[test]
    fn test_desired_width_sums_content() {
        let input = LayoutInput::new("label")
            .with_padding(Padding { top: 2.0, right: 6.0, bottom: 2.0, left: 4.0 })
            .with_icon(Icon::new("star.png", 24.0, 24.0))
            .with_text_left_margin(8.0);

        // 4 + 6 + 24 + 8 + 50
        assert!((desired_width(&input, &metrics(50.0, 15.0)) - 92.0).abs() < 0.001);
    }

    #[test]
    fn test_desired_height_takes_taller_of_icon_and_text() {
        let input = LayoutInput::new("label")
            .with_padding(Padding::symmetric(0.0, 5.0))
            .with_icon(Icon::new("star.png", 24.0, 24.0));

        assert!((desired_height(&input, &metrics(50.0, 15.0)) - 34.0).abs() < 0.001);
        assert!((desired_height(&input, &metrics(50.0, 30.0)) - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_size_at_most_shrinks_to_content() {
        let input = LayoutInput::new("label");
        let size = resolve_size(
            &input,
            &metrics(50.0, 15.0),
            MeasureSpec::at_most(400.0),
            MeasureSpec::at_most(400.0),
        );
        assert_eq!(size, ResolvedSize::new(50.0, 15.0));

        let size = resolve_size(
            &input,
            &metrics(500.0, 15.0),
            MeasureSpec::at_most(400.0),
            MeasureSpec::exact(48.0),
        );
        assert_eq!(size, ResolvedSize::new(400.0, 48.0));
    }

    proptest! {
        #[test]
        fn exact_ignores_content(size in 0.0f64..10_000.0, desired in 0.0f64..10_000.0) {
            prop_assert_eq!(resolve_axis(MeasureMode::Exact, size, desired), size);
        }

        #[test]
        fn at_most_is_min(size in 0.0f64..10_000.0, desired in 0.0f64..10_000.0) {
            let resolved = resolve_axis(MeasureMode::AtMost, size, desired);
            prop_assert_eq!(resolved, size.min(desired));
            prop_assert!(resolved >= 0.0);
        }
    }
}
