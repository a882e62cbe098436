//! Tracing initialization.
//!
//! The TUI owns stdout, so logs go to a file under `~/.quicklink/`.
//! The filter comes from `RUST_LOG`, defaulting to `quicklink=info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Default log file location relative to the home directory.
const LOG_DIR: &str = ".quicklink";
const LOG_FILE: &str = "quicklink.log";

/// Resolve the log file path, creating the directory if needed.
pub fn default_log_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| eyre!("cannot determine home directory"))?;
    let dir = home.join(LOG_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join(LOG_FILE))
}

/// Initialize the global tracing subscriber writing to `path`.
pub fn init_at(path: &Path) -> Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quicklink=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Initialize logging at the default location.
pub fn init() -> Result<()> {
    let path = default_log_path()?;
    init_at(&path)
}
