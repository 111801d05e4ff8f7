pub mod catalogue_view;
pub mod controls_bar;
mod helpers;
pub mod help_overlay;
pub mod slide_view;
pub mod status_row;
pub mod title_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, HitAreas, View};

/// Draw the whole screen for the current view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Hit areas are re-registered by whatever gets drawn this frame
    app.hit_areas = HitAreas::default();

    match app.view() {
        View::Catalogue => {
            // Layout: title bar (2 rows) | list | status row (1 row)
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);
            title_bar::render_title_bar(frame, app, chunks[0]);
            catalogue_view::render_catalogue_view(frame, app, chunks[1]);
            status_row::render_status_row(frame, app, chunks[2]);
        }
        View::Slideshow => {
            // Layout: title bar | slide | buttons + slider (2 rows) | status row
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(2),
                    Constraint::Length(1),
                ])
                .split(area);
            title_bar::render_title_bar(frame, app, chunks[0]);
            slide_view::render_slide_view(frame, app, chunks[1]);
            controls_bar::render_controls_bar(frame, app, chunks[2]);
            status_row::render_status_row(frame, app, chunks[3]);
        }
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
