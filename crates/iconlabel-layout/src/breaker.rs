//! Greedy line breaking with ellipsis truncation.

use iconlabel_core::{Font, FontMetrics, LayoutError};
use smallvec::SmallVec;

use crate::input::LayoutInput;

/// Marker appended to the last kept line when text overflows.
pub const ELLIPSIS: &str = "...";

/// Display lines; labels rarely need more than two.
pub type Lines = SmallVec<[String; 2]>;

/// Result of breaking the label text into lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrokenLines {
    /// At most `max_lines` lines, the last one ellipsized when truncated
    pub lines: Lines,
    /// Whether overflow lines were dropped
    pub truncated: bool,
}

/// Horizontal room left for text in a label `width` pixels wide.
///
/// Fails when the icon, padding and margin consume the whole width.
pub fn text_width_budget(input: &LayoutInput, width: f64) -> Result<f64, LayoutError> {
    let budget = width
        - input.icon_width()
        - input.padding().horizontal()
        - input.text_left_margin();

    if budget.is_nan() || budget <= 0.0 {
        log::debug!(
            "no room for text: width={width}, icon_width={}",
            input.icon_width()
        );
        return Err(LayoutError::LayoutImpossible { budget });
    }

    Ok(budget)
}

/// Break `text` into lines no wider than `width_budget`.
///
/// Each line is the longest prefix of the remaining text the font reports as
/// fitting; at least one character is taken per line so narrow budgets still
/// terminate. If more than `max_lines` lines result, the last kept line loses
/// its final character (when it has more than one) and gains [`ELLIPSIS`].
/// The ellipsis is not re-fitted, so that line may overflow the budget.
pub fn break_lines<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    font: &Font,
    width_budget: f64,
    max_lines: u32,
) -> Result<BrokenLines, LayoutError> {
    if width_budget.is_nan() || width_budget <= 0.0 {
        return Err(LayoutError::LayoutImpossible {
            budget: width_budget,
        });
    }

    let total = text.chars().count();
    let mut lines = Lines::new();
    let mut offset = 0;
    let mut rest = text;

    while offset < total {
        let fit = metrics
            .break_text(text, offset, width_budget, font)
            .min(total - offset);
        let take = fit.max(1);

        let end = rest
            .char_indices()
            .nth(take)
            .map_or(rest.len(), |(idx, _)| idx);
        let (line, tail) = rest.split_at(end);

        log::trace!("line {}: {line:?}", lines.len());
        lines.push(line.to_string());
        rest = tail;
        offset += take;
    }

    let max_lines = max_lines as usize;
    let truncated = lines.len() > max_lines;
    if truncated {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            if last.chars().count() > 1 {
                last.pop();
            }
            last.push_str(ELLIPSIS);
        }
    }

    log::debug!(
        "broke text into {} line(s): budget={width_budget}, truncated={truncated}",
        lines.len()
    );

    Ok(BrokenLines { lines, truncated })
}
