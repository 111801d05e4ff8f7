use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::read_config;
use crate::io::logging::{self, LogSink};
use crate::io::repository::{DirRepository, load_catalogue};
use crate::model::Catalogue;
use crate::ops::address::{self, Location};
use crate::ops::navigation::{NavError, Navigator};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand. `main` launches the TUI when there is none.
pub fn dispatch(
    json: bool,
    root: Option<&str>,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(LogSink::Stderr)?;
    let ctx = Context::open(root)?;

    match cmd {
        Commands::List => cmd_list(&ctx, json),
        Commands::Show(args) => cmd_show(&ctx, args, json),
        Commands::Link(args) => cmd_link(&ctx, args, json),
        Commands::Resolve(args) => cmd_resolve(&ctx, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Content root resolved once per command
struct Context {
    repo: DirRepository,
    catalogue: Catalogue,
}

impl Context {
    fn open(root: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let root = match root {
            Some(dir) => std::fs::canonicalize(dir)
                .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
            None => std::env::current_dir()?,
        };
        let config = read_config(&root)?;
        let repo = DirRepository::from_config(&root, &config.content);
        let catalogue = load_catalogue(&repo);
        Ok(Context { repo, catalogue })
    }

    /// Open `uid` at a 0-based position, the same way the TUI does
    fn open_item(&self, uid: &str, position: i64) -> Result<Navigator, NavError> {
        let mut nav = Navigator::new();
        nav.select_item(&self.repo, uid, position)?;
        Ok(nav)
    }

    fn folder(&self) -> PathBuf {
        self.repo.folder().to_path_buf()
    }
}

fn link_for(nav: &Navigator) -> String {
    let mut location = Location::default();
    location.persist(nav);
    location.href()
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(ctx: &Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = &ctx.catalogue.entries;
    if json {
        let out: Vec<EntryJson> = entries.iter().map(entry_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("no items in {}", ctx.folder().display());
        return Ok(());
    }
    let uid_width = entries.iter().map(|e| e.uid.len()).max().unwrap_or(0);
    for entry in entries {
        println!("{}", format_entry_line(entry, uid_width));
    }
    Ok(())
}

fn cmd_show(ctx: &Context, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let nav = ctx.open_item(&args.uid, 0)?;
    let Some(show) = nav.slideshow() else {
        return Err(NavError::NotFound(args.uid).into());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&slideshow_to_json(show))?);
    } else {
        for line in format_slideshow(show) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_link(ctx: &Context, args: LinkArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let requested = args.position.unwrap_or(1).saturating_sub(1);
    let nav = ctx.open_item(&args.uid, requested)?;
    let Some(show) = nav.slideshow() else {
        return Err(NavError::NotFound(args.uid).into());
    };
    let link = link_for(&nav);
    if json {
        let out = LinkJson {
            uid: show.item_id().to_string(),
            position: show.position() + 1,
            link,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", link);
    }
    Ok(())
}

/// Resolve the way startup does: unknown names never reach the store, and a
/// listed item that cannot be loaded falls back to the catalogue
fn cmd_resolve(
    ctx: &Context,
    args: ResolveArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = Location::parse(&args.link);
    let resolved = match address::decode(location.params(), &ctx.catalogue) {
        None => ResolveJson::Catalogue,
        Some(target) => match ctx.open_item(&target.item_id, target.position) {
            Ok(nav) => match nav.slideshow() {
                Some(show) => ResolveJson::Slideshow {
                    uid: show.item_id().to_string(),
                    position: show.position() + 1,
                },
                None => ResolveJson::Catalogue,
            },
            Err(NavError::NotFound(uid)) => {
                log::info!("{uid} unavailable, resolving to catalogue");
                ResolveJson::Catalogue
            }
        },
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", format_resolved(&resolved));
    }
    Ok(())
}
