//! Error types for signin-gui
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Only the host application's edges can fail; the sign-in form itself
//! records validation problems as state instead of returning errors.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The platform exposes no home-relative project directories
    #[snafu(display("Could not determine project directories"))]
    ProjectDirs,

    /// Creating an application directory failed
    #[snafu(display("Failed to create directory {}: {source}", path.display()))]
    CreateDir { path: PathBuf, source: std::io::Error },

    /// Reading the configuration file failed
    #[snafu(display("Failed to read config file {}: {source}", path.display()))]
    ReadConfig { path: PathBuf, source: std::io::Error },

    /// The configuration file is not valid TOML for `AppConfig`
    #[snafu(display("Failed to parse config file {}: {source}", path.display()))]
    ParseConfig { path: PathBuf, source: toml::de::Error },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
