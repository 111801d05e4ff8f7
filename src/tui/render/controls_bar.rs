use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::controls::{Indicators, indicators};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::center_padding;

const PREV_LABEL: &str = " \u{2039} Prev ";
const NEXT_LABEL: &str = " Next \u{203A} ";
/// Cells kept free on each side of the slider track
const SLIDER_MARGIN: u16 = 2;

/// Render the prev/counter/next row and the slider below it
pub fn render_controls_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let Some(show) = app.nav.slideshow() else {
        frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);
        return;
    };
    let ind = indicators(show);

    let mut lines = vec![button_row(app, &ind, area)];
    if area.height > 1 {
        lines.push(slider_row(app, &ind, area));
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn button_row(app: &mut App, ind: &Indicators, area: Rect) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;
    let enabled = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(theme.dim).bg(bg);

    let prev_w = unicode::display_width(PREV_LABEL);
    let next_w = unicode::display_width(NEXT_LABEL);
    let counter_w = unicode::display_width(&ind.counter);
    if prev_w + counter_w + next_w > width {
        return Line::from(Span::styled(ind.counter.clone(), Style::default().fg(theme.text).bg(bg)))
            .centered();
    }
    let (left, right) = center_padding(width - prev_w - counter_w - next_w);

    let spans = vec![
        Span::styled(
            PREV_LABEL,
            if ind.can_step_backward { enabled } else { disabled },
        ),
        Span::styled(" ".repeat(left), Style::default().bg(bg)),
        Span::styled(ind.counter.clone(), Style::default().fg(theme.text_bright).bg(bg)),
        Span::styled(" ".repeat(right), Style::default().bg(bg)),
        Span::styled(
            NEXT_LABEL,
            if ind.can_step_forward { enabled } else { disabled },
        ),
    ];

    // Disabled buttons take no clicks
    if ind.can_step_backward {
        app.hit_areas.prev = Some(Rect::new(area.x, area.y, prev_w as u16, 1));
    }
    if ind.can_step_forward {
        let x = area.x + (width - next_w) as u16;
        app.hit_areas.next = Some(Rect::new(x, area.y, next_w as u16, 1));
    }
    Line::from(spans)
}

/// Track drawn left to right from `min` to `max`; the first line sits at
/// the right end
fn slider_row(app: &mut App, ind: &Indicators, area: Rect) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let track_w = area.width.saturating_sub(SLIDER_MARGIN * 2);
    if track_w == 0 {
        return Line::from("");
    }
    let handle = ind.range.handle_column(track_w);

    let track_style = Style::default().fg(theme.dim).bg(bg);
    let handle_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let margin = " ".repeat(SLIDER_MARGIN as usize);
    let spans = vec![
        Span::styled(margin.clone(), Style::default().bg(bg)),
        Span::styled("\u{2501}".repeat(handle as usize), track_style),
        Span::styled("\u{25CF}", handle_style),
        Span::styled(
            "\u{2501}".repeat((track_w - handle - 1) as usize),
            track_style,
        ),
        Span::styled(margin, Style::default().bg(bg)),
    ];

    app.hit_areas.slider = Some(Rect::new(area.x + SLIDER_MARGIN, area.y + 1, track_w, 1));
    Line::from(spans)
}
