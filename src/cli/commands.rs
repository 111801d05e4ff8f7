use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slides", about = concat!("slides v", env!("CARGO_PKG_VERSION"), " - line-by-line reader with shareable links"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Content root holding the item folder and slides.toml (default: current directory)
    #[arg(short = 'C', long = "root", global = true)]
    pub root: Option<String>,

    /// Open the TUI at a shareable link, e.g. '?name=<uid>&id=<n>'
    #[arg(long)]
    pub link: Option<String>,

    /// Write TUI logs to this file (the TUI never logs to the terminal)
    #[arg(long)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalogue
    List,
    /// Print every line of an item, numbered from 1
    Show(ShowArgs),
    /// Print the shareable link for an item and position
    Link(LinkArgs),
    /// Resolve a shareable link against the catalogue
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Item uid
    pub uid: String,
}

#[derive(Args)]
pub struct LinkArgs {
    /// Item uid
    pub uid: String,
    /// 1-based line number (default: 1; out-of-range values are clamped)
    #[arg(allow_negative_numbers = true)]
    pub position: Option<i64>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Link or query string, e.g. '/read?name=<uid>&id=<n>'
    pub link: String,
}
