//! Session log file.
//!
//! Each run writes `latest.log` in the cache directory. The previous session's
//! log is archived as `session-<timestamp>.log` and only the newest
//! [`MAX_ARCHIVES`] archives are kept.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

const LATEST: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "session-";

/// Log file used when no cache directory can be determined.
const FALLBACK_LOG_FILE: &str = "signup-form.log";

/// Archived session logs kept next to `latest.log`.
pub const MAX_ARCHIVES: usize = 25;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to rotate logs in {}: {source}", .dir.display())]
    Rotate { dir: PathBuf, source: io::Error },

    #[error("Failed to create log file {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to install logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Archive the previous session's log, open a fresh one and install the
/// logger. Returns the path being logged to.
pub fn init() -> Result<PathBuf, LoggingError> {
    let path = match paths::cache_dir() {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .and_then(|()| rotate(&dir, &archive_name(Local::now()), MAX_ARCHIVES))
                .map_err(|source| LoggingError::Rotate {
                    dir: dir.clone(),
                    source,
                })?;
            dir.join(LATEST)
        }
        None => PathBuf::from(FALLBACK_LOG_FILE),
    };

    let file = File::create(&path).map_err(|source| LoggingError::Create {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(path)
}

fn archive_name(now: DateTime<Local>) -> String {
    format!("{}{}.log", ARCHIVE_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

/// Move `latest.log` in `dir` to `archive`, then prune old archives.
fn rotate(dir: &Path, archive: &str, keep: usize) -> io::Result<()> {
    let latest = dir.join(LATEST);
    if latest.exists() {
        fs::rename(&latest, dir.join(archive))?;
    }
    prune_archives(dir, keep)
}

/// Delete all but the `keep` newest archives in `dir`.
///
/// Archive names carry a zero-padded timestamp, so name order is age order.
/// Files that are not session archives are left alone.
fn prune_archives(dir: &Path, keep: usize) -> io::Result<()> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log") {
            archives.push(name);
        }
    }
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for name in &archives[..excess] {
        fs::remove_file(dir.join(name))?;
    }
    Ok(())
}
