//! Optional user configuration for `gh-po`.

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GH_PATH, DEFAULT_PAGE_SIZE},
    errors::{PoError, PoResult},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PoConfig {
    /// The `gh` binary to invoke.
    pub gh_path: PathBuf,
    /// How many PRs the menu shows at once.
    pub page_size: usize,
    /// Whether to animate a spinner while waiting on `gh`.
    pub spinner: bool,
}

impl Default for PoConfig {
    fn default() -> Self {
        Self {
            gh_path: PathBuf::from(DEFAULT_GH_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            spinner: true,
        }
    }
}

impl PoConfig {
    /// Loads the configuration from `path`, or from the default location when `path` is [None].
    ///
    /// A missing file yields the defaults. A file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> PoResult<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| PoError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml(&raw).map_err(|reason| PoError::Config {
            path: path.clone(),
            reason,
        })?;

        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.message().to_string())
    }
}

/// `$XDG_CONFIG_HOME/gh-po/config.toml`, falling back to `~/.config/gh-po/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
