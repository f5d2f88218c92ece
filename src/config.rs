use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::usecase::services::export_service::DEFAULT_EXPORT_FILE_NAME;

const CONFIG_VERSION: i64 = 1;
const CONFIG_PATH_ENV: &str = "PLAN_TALLY_CONFIG_PATH";
const DEFAULT_WINDOW_TITLE: &str = "Plan Tally";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub export: Export,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            export: Export::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Export {
    pub file_name: Option<String>,
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub window_title: Option<String>,
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "plan-tally")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Loads the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        config.validate(path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = {}",
                self.version,
                path.display(),
                CONFIG_VERSION
            );
        }

        if let Some(name) = &self.export.file_name {
            let trimmed = name.trim();
            if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
                bail!(
                    "export.file_name in {} must be a plain file name, got {:?}",
                    path.display(),
                    name
                );
            }
        }

        Ok(())
    }

    pub fn export_file_name(&self) -> String {
        self.export
            .file_name
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_EXPORT_FILE_NAME)
            .to_string()
    }

    pub fn export_directory(&self) -> Option<PathBuf> {
        self.export.directory.as_ref().map(PathBuf::from)
    }

    pub fn window_title(&self) -> String {
        self.ui
            .window_title
            .clone()
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string())
    }
}
