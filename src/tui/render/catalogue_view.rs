use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

/// Render the selectable item list
pub fn render_catalogue_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if app.catalogue.is_empty() {
        let empty = Paragraph::new(" No items found")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let cursor = app.catalogue_cursor;
    // Keep the cursor on screen
    if cursor < app.catalogue_scroll {
        app.catalogue_scroll = cursor;
    } else if visible_height > 0 && cursor >= app.catalogue_scroll + visible_height {
        app.catalogue_scroll = cursor + 1 - visible_height;
    }
    let scroll = app.catalogue_scroll;
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in app
        .catalogue
        .entries
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
    {
        let is_cursor = i == cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { " \u{25B6} " } else { "   " };

        let name_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let name_budget = width.saturating_sub(unicode::display_width(marker) + 2);
        let name = unicode::truncate_to_width(entry.display_name(), name_budget);

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(name, name_style),
        ];
        // Unnamed entries already show the uid as their name
        if entry.name_fa.as_deref().is_some_and(|n| !n.is_empty()) {
            let used = spans_width(&spans);
            if used + 2 + unicode::display_width(&entry.uid) <= width {
                spans.push(Span::styled(
                    format!("  {}", entry.uid),
                    Style::default().fg(app.theme.dim).bg(row_bg),
                ));
            }
        }
        if is_cursor {
            let used = spans_width(&spans);
            if used < width {
                spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
            }
        }

        let row = Rect::new(area.x, area.y + lines.len() as u16, area.width, 1);
        app.hit_areas.catalogue_rows.push((row, i));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
