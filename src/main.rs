use std::path::Path;

use clap::Parser;
use slides::cli::commands::Cli;
use slides::cli::handlers;
use slides::tui::RunOptions;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let options = RunOptions {
                root: cli.root.as_deref().map(Path::new),
                link: cli.link.as_deref(),
                log_file: cli.log_file.as_deref().map(Path::new),
            };
            if let Err(e) = slides::tui::run(options) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(cmd) => {
            if let Err(e) = handlers::dispatch(cli.json, cli.root.as_deref(), cmd) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
