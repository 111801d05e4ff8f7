use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::read_config;
use crate::io::loader::ItemLoader;
use crate::io::logging::{self, LogSink};
use crate::io::repository::{DirRepository, load_catalogue};
use crate::model::{Catalogue, UiConfig};
use crate::ops::address::{self, Location};
use crate::ops::controls::Trigger;
use crate::ops::navigation::{NavError, Navigator};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Selectable list of items
    Catalogue,
    /// An item is showing or on its way
    Slideshow,
}

/// Screen regions that accept mouse clicks, refreshed on every draw
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub home: Option<Rect>,
    pub contrast: Option<Rect>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub slider: Option<Rect>,
    /// One row per visible catalogue entry: (row area, entry index)
    pub catalogue_rows: Vec<(Rect, usize)>,
}

/// Main application state
pub struct App {
    pub catalogue: Catalogue,
    pub nav: Navigator,
    pub location: Location,
    pub loader: ItemLoader,
    pub ui: UiConfig,
    pub theme: Theme,
    pub dark_mode: bool,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor for the catalogue view
    pub catalogue_cursor: usize,
    /// Scroll offset for the catalogue view
    pub catalogue_scroll: usize,
    pub hit_areas: HitAreas,
}

impl App {
    pub fn new(catalogue: Catalogue, loader: ItemLoader, location: Location, ui: UiConfig) -> Self {
        let dark_mode = ui.dark_mode;
        let theme = Theme::from_config(&ui, dark_mode);
        App {
            catalogue,
            nav: Navigator::new(),
            location,
            loader,
            ui,
            theme,
            dark_mode,
            should_quit: false,
            show_help: false,
            catalogue_cursor: 0,
            catalogue_scroll: 0,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn view(&self) -> View {
        if self.nav.is_empty() && !self.nav.is_loading() {
            View::Catalogue
        } else {
            View::Slideshow
        }
    }

    /// Open whatever the startup address points at, or show the catalogue
    pub fn resolve_address(&mut self) {
        match address::decode(self.location.params(), &self.catalogue) {
            Some(resolved) => self.request_item(&resolved.item_id, resolved.position),
            None => {
                self.nav.reset();
                self.location.persist(&self.nav);
            }
        }
    }

    /// Apply one input trigger. Only `Select` does anything while no item
    /// is showing; `Home` also cancels a pending load.
    pub fn trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Select(item_id) => self.request_item(&item_id, 0),
            Trigger::Home => {
                if self.view() == View::Catalogue {
                    return;
                }
                self.nav.reset();
                self.location.persist(&self.nav);
            }
            positional => {
                let Some(target) = self.nav.slideshow().and_then(|s| positional.target(s)) else {
                    return;
                };
                if self.nav.go_to(target).is_some() {
                    self.location.persist(&self.nav);
                }
            }
        }
    }

    fn request_item(&mut self, item_id: &str, position: i64) {
        let ticket = self.nav.begin_select(item_id, position);
        self.loader.request(ticket);
    }

    /// Commit finished fetches. A failed current fetch falls back to the
    /// catalogue.
    pub fn pump_loads(&mut self) {
        for result in self.loader.poll() {
            match self.nav.commit(result.ticket, result.fetched) {
                Ok(Some(_)) => {
                    self.location.persist(&self.nav);
                }
                Ok(None) => {}
                Err(NavError::NotFound(item_id)) => {
                    log::info!("{item_id} unavailable, back to catalogue");
                    self.nav.reset();
                    self.location.persist(&self.nav);
                }
            }
        }
    }

    pub fn toggle_contrast(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::from_config(&self.ui, self.dark_mode);
    }

    pub fn move_catalogue_cursor(&mut self, delta: isize) {
        let len = self.catalogue.len();
        if len == 0 {
            return;
        }
        self.catalogue_cursor = self.catalogue_cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Uid of the catalogue entry under the cursor
    pub fn selected_entry(&self) -> Option<&str> {
        self.catalogue
            .entries
            .get(self.catalogue_cursor)
            .map(|e| e.uid.as_str())
    }
}

/// Startup options for the TUI
#[derive(Debug, Default)]
pub struct RunOptions<'a> {
    /// Content root (default: current directory)
    pub root: Option<&'a Path>,
    /// Incoming shareable link, read once at startup
    pub link: Option<&'a str>,
    pub log_file: Option<&'a Path>,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(LogSink::File(options.log_file))?;

    let root = match options.root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let config = read_config(&root)?;
    let repo = Arc::new(DirRepository::from_config(&root, &config.content));
    let catalogue = load_catalogue(repo.as_ref());
    let location = Location::parse(options.link.unwrap_or_default());

    let mut app = App::new(catalogue, ItemLoader::threaded(repo), location, config.ui);
    app.resolve_address();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Leave the resumable link behind
    if !app.location.params().is_empty() {
        println!("{}", app.location);
    }

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.pump_loads();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
