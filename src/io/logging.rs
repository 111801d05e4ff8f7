use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV: &str = "SLIDES_LOG";

/// Where log records go for this process
pub enum LogSink<'a> {
    /// CLI commands log to stderr
    Stderr,
    /// The TUI owns the terminal, so it logs to a file or not at all
    File(Option<&'a Path>),
}

/// Install the global logger. Safe to call more than once; later calls are
/// ignored.
pub fn init(sink: LogSink) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"));
    match sink {
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::File(Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        // No logger installed: records are discarded
        LogSink::File(None) => return Ok(()),
    }
    let _ = builder.try_init();
    Ok(())
}
