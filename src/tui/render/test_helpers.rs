use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::loader::ItemLoader;
use crate::io::repository::{MemoryRepository, load_catalogue};
use crate::model::{Item, Line, UiConfig};
use crate::ops::address::Location;
use crate::ops::controls::Trigger;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

fn text(primary: Option<&str>, secondary: Option<&str>, meta: Option<&str>) -> Line {
    Line {
        primary: primary.map(String::from),
        secondary: secondary.map(String::from),
        meta: meta.map(String::from),
        terminal: false,
    }
}

/// Two items: `a1` ("Alef", two content lines) and unnamed `b2` (four).
pub fn sample_repo() -> MemoryRepository {
    MemoryRepository::new()
        .with_item(Item {
            uid: "a1".into(),
            name_fa: Some("Alef".into()),
            content: vec![
                text(Some("first primary"), Some("first secondary"), Some("note one")),
                text(None, Some("second secondary"), None),
            ],
        })
        .with_item(Item {
            uid: "b2".into(),
            name_fa: None,
            content: vec![
                text(Some("short"), None, None),
                text(
                    Some("a much longer primary line that keeps going past the edge"),
                    None,
                    None,
                ),
                text(Some("third"), None, None),
                text(Some("fourth"), None, None),
            ],
        })
}

/// App on the catalogue view, nothing selected.
pub fn app_with_catalogue() -> App {
    let repo = Arc::new(sample_repo());
    let catalogue = load_catalogue(repo.as_ref());
    App::new(
        catalogue,
        ItemLoader::inline(repo),
        Location::parse(""),
        UiConfig::default(),
    )
}

/// App showing `uid` at `position` (clamped), loads already committed.
pub fn app_showing(uid: &str, position: i64) -> App {
    let mut app = app_with_catalogue();
    app.trigger(Trigger::Select(uid.to_string()));
    app.pump_loads();
    app.nav.go_to(position);
    app.location.persist(&app.nav);
    app
}
