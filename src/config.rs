/// Application configuration
///
/// Values are layered: built-in defaults, then the optional settings file
/// (`<config dir>/woodshop/settings.json`), then command-line flags and
/// `WOODSHOP_*` environment variables.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog JSON file
    pub catalog_path: PathBuf,
    /// Prefix the site is deployed under; asset paths starting with `/`
    /// are joined onto it
    pub base_path: String,
    /// Local directory that `base_path` maps to (the site's public folder)
    pub asset_root: PathBuf,
    /// Generate down-scaled thumbnails for project grids
    pub thumbnails: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/projects.json"),
            base_path: "/".to_string(),
            asset_root: PathBuf::from("public"),
            thumbnails: true,
        }
    }
}

/// Values given on the command line (or through the environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog_path: Option<PathBuf>,
    pub base_path: Option<String>,
    pub asset_root: Option<PathBuf>,
    pub no_thumbnails: bool,
}

impl AppConfig {
    /// Where the settings file lives
    /// - Linux: ~/.config/woodshop/settings.json
    /// - macOS: ~/Library/Application Support/woodshop/settings.json
    /// - Windows: %APPDATA%\woodshop\settings.json
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("woodshop");
            path.push("settings.json");
            path
        })
    }

    /// Build the effective configuration
    pub fn resolve(
        settings_file: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match settings_file {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("⚙️  Settings loaded from {}", path.display());
        Ok(config)
    }

    fn apply(&mut self, overrides: Overrides) {
        if let Some(path) = overrides.catalog_path {
            self.catalog_path = path;
        }
        if let Some(base) = overrides.base_path {
            self.base_path = base;
        }
        if let Some(root) = overrides.asset_root {
            self.asset_root = root;
        }
        if overrides.no_thumbnails {
            self.thumbnails = false;
        }
    }
}
