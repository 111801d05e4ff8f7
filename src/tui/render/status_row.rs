use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};
use crate::util::unicode;

use super::helpers::spans_width;

/// Render the status row (bottom of screen): shareable link on the left,
/// key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if !app.location.params().is_empty() {
        let link = app.location.href();
        spans.push(Span::styled(
            format!(" {}", unicode::truncate_to_width(&link, width.saturating_sub(1))),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if app.ui.show_key_hints {
        let hint = match app.view() {
            View::Catalogue => "\u{2191}\u{2193} move  Enter open  ? help  q quit ",
            View::Slideshow => "\u{2190}\u{2192} step  Home back  ? help  q quit ",
        };
        let content_width = spans_width(&spans);
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
