//! User configuration
//!
//! Optional `config.toml` in the platform config directory
//! (`~/.config/changelog-cli/` on Linux).

use std::path::PathBuf;

use serde::Deserialize;

use crate::changelog::DEFAULT_AUTHOR;

/// Settings read from config.toml
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Author recorded on changesets when --author is not given
    pub default_author: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when it is absent
    /// or malformed
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            log::debug!("no config file at {}", path.display());
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve the changeset author: command-line flag over config file
    /// over the built-in default
    pub fn resolve_author(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.default_author.clone())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
    }
}

fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("changelog-cli").join("config.toml"))
}
