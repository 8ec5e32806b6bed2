//! Vertical placement of display lines.

/// Baseline Y of each visible line in a container `container_height` tall.
///
/// With `n = min(line_count, max_lines)` visible lines and
/// `extra = (line_spacing - 1) * line_height`, line `i` sits at
///
/// ```text
/// container_height / 2 - n * line_height / 2 - extra * (n - 1)
///     + line_height * (i + 1) + i * extra
/// ```
///
/// The extra spacing is subtracted in full above the block but added only
/// between lines, so blocks with spacing above 1 sit higher than true center.
/// Renderers depend on this exact placement.
pub fn place_lines(
    line_count: usize,
    max_lines: u32,
    line_height: f64,
    line_spacing: f64,
    container_height: f64,
) -> Vec<f64> {
    let visible = line_count.min(max_lines as usize);
    if visible == 0 {
        return Vec::new();
    }

    let n = visible as f64;
    let extra = (line_spacing - 1.0) * line_height;
    let top = container_height / 2.0 - n * line_height / 2.0 - extra * (n - 1.0);

    (0..visible)
        .map(|i| {
            let i = i as f64;
            top + line_height * (i + 1.0) + i * extra
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 0.001, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_two_lines_without_extra_spacing() {
        let baselines = place_lines(2, 2, 20.0, 1.0, 100.0);
        // 100/2 - 2*20/2 = 30 above the block
        assert_close(&baselines, &[50.0, 70.0]);
    }

    #[test]
    fn test_single_line_centered() {
        // Extra spacing has no effect on a single line
        let baselines = place_lines(1, 1, 20.0, 1.3, 100.0);
        assert_close(&baselines, &[60.0]);
    }

    #[test]
    fn test_extra_spacing_shifts_block_up() {
        // extra = 10, top = 50 - 20 - 10 = 20
        let baselines = place_lines(2, 2, 20.0, 1.5, 100.0);
        assert_close(&baselines, &[40.0, 70.0]);
    }

    #[test]
    fn test_three_lines_with_spacing() {
        // extra = 5, top = 30 - 30 - 10 = -10
        let baselines = place_lines(3, 3, 20.0, 1.25, 60.0);
        assert_close(&baselines, &[10.0, 35.0, 60.0]);
    }

    #[test]
    fn test_visible_count_capped_by_max_lines() {
        let baselines = place_lines(3, 2, 20.0, 1.0, 100.0);
        assert_close(&baselines, &[50.0, 70.0]);
    }

    #[test]
    fn test_no_lines() {
        assert!(place_lines(0, 3, 20.0, 1.3, 100.0).is_empty());
    }
}
