//! File System Utilities
//!
//! Platform directories for configuration and log files.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::{OptionExt, ResultExt};

use crate::error::{CreateDirSnafu, ProjectDirsSnafu, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "signin-gui", "signin-gui").context(ProjectDirsSnafu)
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).context(CreateDirSnafu { path: dir })?;
    }
    Ok(dir.to_path_buf())
}

/// Get the application's configuration directory without creating it
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/signin-gui/` or `$XDG_CONFIG_HOME/signin-gui/`
/// - **macOS**: `~/Library/Application Support/dev.signin-gui.signin-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\signin-gui\signin-gui\config\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get or create the directory for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/signin-gui/logs/`
/// - **macOS**: `~/Library/Application Support/dev.signin-gui.signin-gui/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\signin-gui\signin-gui\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    ensure_dir(&project_dirs()?.data_dir().join("logs"))
}
