//! Runtime settings.
//!
//! With the `config` feature, settings are read from a TOML file. Search order
//! (first found wins):
//! 1. the path given with `--config`
//! 2. `./filerev.toml`
//! 3. `<config dir>/filerev/config.toml`
//! 4. built-in defaults
//!
//! ```toml
//! default_file = "assets/test.txt"
//! display_mode = "simple"
//! ```

use crate::error::{FilerevError, Result};
use std::path::{Path, PathBuf};

/// Sample file used when no path is given on the command line
pub const DEFAULT_FILE: &str = "assets/test.txt";

/// Settings file looked up in the working directory
pub const LOCAL_SETTINGS_FILE: &str = "filerev.toml";

/// How results are presented. Currently both modes print the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    #[default]
    Simple,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Settings {
    /// File shown when the command line names none
    pub default_file: PathBuf,
    pub display_mode: DisplayMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILE),
            display_mode: DisplayMode::default(),
        }
    }
}

impl Settings {
    /// Load settings, preferring `explicit` when given.
    ///
    /// An explicit path that cannot be read is an error; the implicit
    /// locations are skipped when absent.
    #[cfg(feature = "config")]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_SETTINGS_FILE);
        if local.is_file() {
            return Self::from_file(&local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("filerev").join("config.toml");
            if global.is_file() {
                return Self::from_file(&global);
            }
        }

        Ok(Self::default())
    }

    /// Without the `config` feature only the defaults are available.
    #[cfg(not(feature = "config"))]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Err(FilerevError::config(format!(
                "cannot load {}: built without the `config` feature",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }

    #[cfg(feature = "config")]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FilerevError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        log::debug!("loaded settings from {}", path.display());
        Self::from_toml_str(&content)
            .map_err(|e| FilerevError::config(format!("{}: {e}", path.display())))
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilerevError::config(e.to_string()))
    }
}
