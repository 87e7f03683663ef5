//! Configuration file discovery for the CLI.
//!
//! A configuration is taken from the first place that has one: the path given
//! on the command line, `easel/config.toml` under the working directory, then
//! the platform configuration directory. Without any, defaults apply.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use easel::{EaselError, config::AppConfig};

const LOCAL_CONFIG: &str = "easel/config.toml";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for EaselError {
    fn from(err: ConfigError) -> Self {
        EaselError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Passed with `--config`.
    Explicit,
    /// Under the working directory.
    Local,
    /// In the platform configuration directory.
    System,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::System => "system",
        })
    }
}

/// Find and load the configuration.
///
/// # Errors
///
/// Returns [`EaselError::Config`] if an explicit path does not exist or the
/// selected file is not a valid configuration, and [`EaselError::Io`] if it
/// cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, EaselError> {
    let found = match explicit_path {
        Some(path) => Some((ConfigSource::Explicit, path.as_ref().to_path_buf())),
        None => discover(),
    };

    let Some((source, path)) = found else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source:%, path:% = path.display(); "Loading configuration");
    read_config(&path)
}

/// Returns the first existing implicit configuration file.
fn discover() -> Option<(ConfigSource, PathBuf)> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some((ConfigSource::Local, local));
    }

    let Some(dirs) = ProjectDirs::from("com", "easel", "easel") else {
        debug!("Could not determine platform-specific config directory");
        return None;
    };

    let system = dirs.config_dir().join(CONFIG_FILE_NAME);
    if system.is_file() {
        return Some((ConfigSource::System, system));
    }

    debug!(path:% = system.display(); "System configuration file not found");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, EaselError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    Ok(config)
}
