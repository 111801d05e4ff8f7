use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::slide::{self, BlockKind, Fragment};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::center_padding;

/// Render the current line of the active item, centered in `area`
pub fn render_slide_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rows = match app.nav.current_line() {
        Some(line) => fragment_rows(&slide::render(line), &app.theme, area.width),
        // Selection requested, fetch still running
        None => vec![Line::from(Span::styled(
            "Loading\u{2026}",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .centered()],
    };

    let height = area.height as usize;
    let (top, _) = center_padding(height.saturating_sub(rows.len()));
    let mut lines: Vec<Line> = vec![Line::from(""); top];
    lines.extend(rows);

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Wrap and style each block, one blank row between blocks
fn fragment_rows(fragment: &Fragment, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let text_width = (width as usize).saturating_sub(4).max(1);
    let mut rows = Vec::new();
    for (i, block) in fragment.blocks.iter().enumerate() {
        if i > 0 {
            rows.push(Line::from(""));
        }
        let style = block_style(block.kind, fragment.terminal, theme);
        for row in unicode::wrap_words(&block.text, text_width) {
            rows.push(Line::from(Span::styled(row, style)).centered());
        }
    }
    rows
}

fn block_style(kind: BlockKind, terminal: bool, theme: &Theme) -> Style {
    let base = Style::default().bg(theme.background);
    if terminal {
        return base
            .fg(theme.highlight)
            .add_modifier(Modifier::ITALIC | Modifier::BOLD);
    }
    match kind {
        BlockKind::Meta => base.fg(theme.meta).add_modifier(Modifier::ITALIC),
        BlockKind::Primary => base.fg(theme.primary).add_modifier(Modifier::BOLD),
        BlockKind::Secondary => base.fg(theme.secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TERMINAL_TEXT;
    use crate::ops::controls::Trigger;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_all_blocks_of_current_line() {
        let app = app_showing("a1", 0);
        let output = render_to_string(TERM_W, 12, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        let rows: Vec<&str> = output.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(rows, vec!["note one", "first primary", "first secondary"]);
    }

    #[test]
    fn omits_missing_blocks() {
        let mut app = app_showing("a1", 0);
        app.trigger(Trigger::StepForward);
        let output = render_to_string(TERM_W, 12, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        let rows: Vec<&str> = output.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert_eq!(rows, vec!["second secondary"]);
    }

    #[test]
    fn terminal_line_is_last() {
        let app = app_showing("a1", 99);
        let output = render_to_string(TERM_W, 12, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        assert!(output.contains(TERMINAL_TEXT));
    }

    #[test]
    fn text_is_centered_vertically() {
        let app = app_showing("b2", 0);
        let output = render_to_string(TERM_W, 11, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        // One row of content in 11 rows: five blank rows above it
        let first = output.lines().position(|l| !l.trim().is_empty()).unwrap();
        assert_eq!(first, 5);
    }

    #[test]
    fn long_text_wraps() {
        let app = app_showing("b2", 1);
        let output = render_to_string(24, 12, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        let rows: Vec<&str> = output.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| unicode::display_width(r) <= 20));
    }

    #[test]
    fn pending_load_shows_placeholder() {
        let mut app = app_with_catalogue();
        app.nav.begin_select("a1", 0);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_slide_view(frame, &app, area);
        });
        assert!(output.contains("Loading"));
    }
}
