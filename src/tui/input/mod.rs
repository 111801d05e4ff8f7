mod catalogue;
mod slideshow;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app::{App, View};
use crate::ops::controls::{RangeControl, Trigger};

use catalogue::handle_catalogue;
use slideshow::handle_slideshow;

pub use slideshow::slideshow_trigger;

/// Handle a key event in the current view
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('c') => {
            app.toggle_contrast();
            return;
        }
        _ => {}
    }

    match app.view() {
        View::Catalogue => handle_catalogue(app, key),
        View::Slideshow => handle_slideshow(app, key),
    }
}

/// Handle clicks and drags on the on-screen controls
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                app.show_help = false;
                return;
            }
            let areas = &app.hit_areas;
            if hit(areas.contrast, pos) {
                app.toggle_contrast();
            } else if hit(areas.home, pos) {
                app.trigger(Trigger::Home);
            } else if hit(areas.prev, pos) {
                app.trigger(Trigger::StepBackward);
            } else if hit(areas.next, pos) {
                app.trigger(Trigger::StepForward);
            } else if let Some(trigger) = slider_jump(app, pos) {
                app.trigger(trigger);
            } else if let Some(&(_, index)) =
                areas.catalogue_rows.iter().find(|(r, _)| r.contains(pos))
                && let Some(entry) = app.catalogue.entries.get(index)
            {
                app.catalogue_cursor = index;
                let uid = entry.uid.clone();
                app.trigger(Trigger::Select(uid));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(trigger) = slider_jump(app, pos) {
                app.trigger(trigger);
            }
        }
        MouseEventKind::ScrollDown if app.view() == View::Catalogue => {
            app.move_catalogue_cursor(1);
        }
        MouseEventKind::ScrollUp if app.view() == View::Catalogue => {
            app.move_catalogue_cursor(-1);
        }
        _ => {}
    }
}

fn hit(area: Option<Rect>, pos: Position) -> bool {
    area.is_some_and(|r| r.contains(pos))
}

/// Jump trigger for a press on the slider track
fn slider_jump(app: &App, pos: Position) -> Option<Trigger> {
    let area = app.hit_areas.slider.filter(|r| r.contains(pos))?;
    let range = RangeControl::for_slideshow(app.nav.slideshow()?);
    Some(Trigger::Jump(range.value_at(pos.x - area.x, area.width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_and_page_keys_step() {
        let mut app = app_showing("b2", 0);
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.nav.position(), Some(2));
        handle_key(&mut app, key(KeyCode::PageUp));
        assert_eq!(app.nav.position(), Some(1));
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.nav.position(), Some(0));
    }

    #[test]
    fn home_key_returns_to_catalogue() {
        let mut app = app_showing("a1", 1);
        handle_key(&mut app, key(KeyCode::Home));
        assert_eq!(app.view(), View::Catalogue);
        assert!(app.location.params().is_empty());
    }

    #[test]
    fn enter_selects_catalogue_entry() {
        let mut app = app_with_catalogue();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        app.pump_loads();
        assert_eq!(app.nav.active_item_id(), Some("b2"));
        assert_eq!(app.nav.position(), Some(0));
    }

    #[test]
    fn paging_keys_do_nothing_in_catalogue() {
        let mut app = app_with_catalogue();
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Home));
        assert!(app.nav.is_empty());
        assert!(!app.nav.is_loading());
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app_showing("b2", 0);
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.nav.position(), Some(0));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn quit_and_contrast_keys() {
        let mut app = app_with_catalogue();
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert!(app.dark_mode);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.dark_mode);
    }

    #[test]
    fn clicking_slider_jumps() {
        let mut app = app_showing("b2", 0);
        app.hit_areas.slider = Some(Rect::new(10, 20, 9, 1));
        // b2 has 5 lines; the left end is value 1, the last line
        handle_mouse(&mut app, click(10, 20));
        assert_eq!(app.nav.position(), Some(4));
        // the right end is value 5, the first line
        handle_mouse(&mut app, click(18, 20));
        assert_eq!(app.nav.position(), Some(0));
        assert_eq!(app.location.href(), "?name=b2&id=1");
    }

    #[test]
    fn clicking_buttons() {
        let mut app = app_showing("b2", 1);
        app.hit_areas.prev = Some(Rect::new(0, 5, 6, 1));
        app.hit_areas.next = Some(Rect::new(20, 5, 6, 1));
        app.hit_areas.home = Some(Rect::new(40, 0, 6, 1));
        handle_mouse(&mut app, click(21, 5));
        assert_eq!(app.nav.position(), Some(2));
        handle_mouse(&mut app, click(2, 5));
        assert_eq!(app.nav.position(), Some(1));
        handle_mouse(&mut app, click(41, 0));
        assert!(app.nav.is_empty());
    }

    #[test]
    fn clicking_catalogue_row_selects() {
        let mut app = app_with_catalogue();
        app.hit_areas.catalogue_rows = vec![(Rect::new(0, 3, 40, 1), 0), (Rect::new(0, 4, 40, 1), 1)];
        handle_mouse(&mut app, click(5, 4));
        app.pump_loads();
        assert_eq!(app.catalogue_cursor, 1);
        assert_eq!(app.nav.active_item_id(), Some("b2"));
    }
}
