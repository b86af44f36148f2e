use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::DATA_DIR_ENV;
use crate::core::{CatalogPreset, MoodCatalog, MoodSpec};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) user: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) catalog: Option<CatalogPreset>,
    /// Custom catalog; replaces `catalog` when present
    #[serde(default)]
    pub(crate) moods: Vec<MoodSpec>,
    /// Days the streak counter looks back; 0 means no limit
    #[serde(default)]
    pub(crate) streak_cap: Option<u32>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) log_level: Option<String>,
}

impl Config {
    /// Load the first config file that exists and parses.
    ///
    /// Runs before logging is set up, so problems go straight to stderr.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            if let Some(config) = Self::load_from(&path) {
                return config;
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Catalog to aggregate with. An explicit `--catalog` wins over custom
    /// `[[moods]]`, which win over the configured preset.
    pub(crate) fn mood_catalog(
        &self,
        cli_preset: Option<CatalogPreset>,
    ) -> Result<MoodCatalog, AppError> {
        if let Some(preset) = cli_preset {
            return Ok(MoodCatalog::preset(preset));
        }
        if !self.moods.is_empty() {
            return MoodCatalog::from_specs(&self.moods);
        }
        Ok(MoodCatalog::preset(self.catalog.unwrap_or_default()))
    }

    /// Root of the exported document tree: `--data-dir`, then
    /// `$MOODSTATS_DATA_DIR`, then config, then the platform data dir.
    pub(crate) fn resolve_data_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_dir {
            return dir.to_path_buf();
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("moodstats"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/moodstats/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("moodstats").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("moodstats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.moodstats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".moodstats.toml"));
        }

        paths
    }
}
