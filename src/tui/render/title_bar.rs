use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};
use crate::util::unicode;

use super::helpers::spans_width;

const HOME_LABEL: &str = " \u{2302} Home ";
const CONTRAST_LABEL: &str = " \u{25D0} Contrast ";

/// Render the title row (item name, buttons) and the separator below it
pub fn render_title_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = match app.view() {
        View::Catalogue => "Catalogue".to_string(),
        View::Slideshow => match app.nav.slideshow() {
            Some(show) => show.name().to_string(),
            None => "Loading\u{2026}".to_string(),
        },
    };

    let button_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut buttons: Vec<Span> = Vec::new();
    if app.view() == View::Slideshow {
        buttons.push(Span::styled(HOME_LABEL, button_style));
    }
    buttons.push(Span::styled(CONTRAST_LABEL, button_style));
    let buttons_width = spans_width(&buttons);

    let title_budget = width.saturating_sub(buttons_width + 2);
    let title = unicode::truncate_to_width(&title, title_budget);
    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let used = spans_width(&spans);
    if used + buttons_width <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - buttons_width),
            Style::default().bg(bg),
        ));

        // Register the buttons where they land on screen
        let mut x = area.x + (width - buttons_width) as u16;
        for button in &buttons {
            let w = unicode::display_width(&button.content) as u16;
            let rect = Rect::new(x, area.y, w, 1);
            if button.content == HOME_LABEL {
                app.hit_areas.home = Some(rect);
            } else {
                app.hit_areas.contrast = Some(rect);
            }
            x += w;
        }
        spans.extend(buttons);
    }

    let mut lines = vec![Line::from(spans)];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
