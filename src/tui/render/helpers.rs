use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Split `free` cells of padding around centered content: (left, right)
pub(super) fn center_padding(free: usize) -> (usize, usize) {
    let left = free / 2;
    (left, free - left)
}
