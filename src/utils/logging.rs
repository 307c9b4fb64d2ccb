//! File logging for the terminal front end.
//!
//! The alternate screen owns stdout and stderr while the game runs, so log
//! records go to a file instead. Logging stays off unless `--log FILE` is
//! given. `FLYWARRIOR_LOG` overrides the level with the usual env_logger
//! filter syntax (e.g. `FLYWARRIOR_LOG=debug`).

use env_logger::{Builder, Env, Target};
use log::{LevelFilter, Record};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "FLYWARRIOR_LOG";

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// One log line without the trailing newline.
fn format_record(timestamp: &str, record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install a logger that appends to `path`, creating parent directories.
///
/// Fails if the file can't be opened or a logger is already installed.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| {
            let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(buf, "{}", format_record(&now.to_string(), record))
        })
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("logging to {}", path.display());
    Ok(())
}
