use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::controls::Trigger;
use crate::tui::app::App;

pub(super) fn handle_catalogue(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_catalogue_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_catalogue_cursor(1),
        KeyCode::Char('g') => app.catalogue_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.catalogue_cursor = app.catalogue.len().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(uid) = app.selected_entry() {
                let uid = uid.to_string();
                app.trigger(Trigger::Select(uid));
            }
        }
        _ => {}
    }
}
