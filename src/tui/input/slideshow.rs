use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::controls::Trigger;
use crate::tui::app::App;

pub(super) fn handle_slideshow(app: &mut App, key: KeyEvent) {
    if let Some(trigger) = slideshow_trigger(key.code) {
        app.trigger(trigger);
    }
}

/// Key bindings for paging through an item
pub fn slideshow_trigger(code: KeyCode) -> Option<Trigger> {
    match code {
        KeyCode::Left | KeyCode::PageUp => Some(Trigger::StepBackward),
        KeyCode::Right | KeyCode::PageDown => Some(Trigger::StepForward),
        KeyCode::Home => Some(Trigger::Home),
        _ => None,
    }
}
